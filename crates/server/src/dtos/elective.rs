use database::entities::elective_rules;
use database::services::elective::{
    CourseRequiredSetting, CreateElectiveRule, ElectiveSettings, FreeElectiveUpdate,
    SettingOutcome,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct ElectiveRuleResponse {
    pub id: Uuid,
    pub curriculum_id: Uuid,
    pub category: String,
    pub required_credits: i16,
}

impl From<elective_rules::Model> for ElectiveRuleResponse {
    fn from(rule: elective_rules::Model) -> Self {
        Self {
            id: rule.id,
            curriculum_id: rule.curriculum_id,
            category: rule.category,
            required_credits: rule.required_credits,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateElectiveRuleRequest {
    pub category: String,
    pub required_credits: i16,
}

impl From<CreateElectiveRuleRequest> for CreateElectiveRule {
    fn from(req: CreateElectiveRuleRequest) -> Self {
        Self {
            category: req.category,
            required_credits: req.required_credits,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateElectiveRuleRequest {
    pub required_credits: i16,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FreeElectiveRequest {
    pub name: String,
    pub required_credits: i16,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CourseSettingRequest {
    pub curriculum_course_id: Uuid,
    pub is_required: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ElectiveSettingsRequest {
    pub free_elective: Option<FreeElectiveRequest>,
    #[serde(default)]
    pub course_settings: Vec<CourseSettingRequest>,
}

impl From<ElectiveSettingsRequest> for ElectiveSettings {
    fn from(req: ElectiveSettingsRequest) -> Self {
        Self {
            free_elective: req.free_elective.map(|free| FreeElectiveUpdate {
                name: free.name,
                required_credits: free.required_credits,
            }),
            course_settings: req
                .course_settings
                .into_iter()
                .map(|setting| CourseRequiredSetting {
                    curriculum_course_id: setting.curriculum_course_id,
                    is_required: setting.is_required,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SettingOutcomeResponse {
    pub target: String,
    pub applied: bool,
    pub error: Option<String>,
}

impl From<SettingOutcome> for SettingOutcomeResponse {
    fn from(outcome: SettingOutcome) -> Self {
        Self {
            target: outcome.target,
            applied: outcome.applied,
            error: outcome.error,
        }
    }
}

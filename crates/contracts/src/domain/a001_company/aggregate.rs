use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, FieldError, RecordStatus,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
crate::uuid_aggregate_id!(CompanyId);

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(flatten)]
    pub base: BaseAggregate<CompanyId>,

    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub city: String,

    // Налоговый идентификатор
    #[serde(default)]
    pub inn: String,

    #[serde(default)]
    pub status: RecordStatus,
}

impl Company {
    pub fn new_for_insert(code: String, dto: CompanyDto) -> Self {
        let mut base = BaseAggregate::new(CompanyId::new_v4(), code, dto.description);
        base.comment = dto.comment;

        Self {
            base,
            email: dto.email.unwrap_or_default(),
            phone: dto.phone.unwrap_or_default(),
            city: dto.city.unwrap_or_default(),
            inn: dto.inn.unwrap_or_default(),
            status: dto.status.unwrap_or_default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn name(&self) -> &str {
        &self.base.description
    }

    /// Применить частичное обновление: меняются только переданные поля
    pub fn apply_patch(&mut self, patch: &CompanyPatch) {
        if let Some(code) = &patch.code {
            self.base.code = code.clone();
        }
        if let Some(description) = &patch.description {
            self.base.description = description.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(phone) = &patch.phone {
            self.phone = phone.clone();
        }
        if let Some(city) = &patch.city {
            self.city = city.clone();
        }
        if let Some(inn) = &patch.inn {
            self.inn = inn.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(comment) = &patch.comment {
            self.base.set_comment(comment.clone());
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.base.description.trim().is_empty() {
            return Err(FieldError::required("name"));
        }
        if self.base.code.trim().is_empty() {
            return Err(FieldError::required("code"));
        }
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err(FieldError::new("email", "email must contain '@'"));
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Company {
    type Id = CompanyId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "company"
    }

    fn element_name() -> &'static str {
        "Company"
    }

    fn list_name() -> &'static str {
        "Companies"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompanyDto {
    pub code: Option<String>,
    pub description: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub inn: Option<String>,
    pub status: Option<RecordStatus>,
    pub comment: Option<String>,
}

/// Частичное обновление компании
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompanyPatch {
    pub code: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub inn: Option<String>,
    pub status: Option<RecordStatus>,
    pub comment: Option<Option<String>>,
}

use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, FieldError, RecordStatus,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
crate::uuid_aggregate_id!(CustomerId);

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(flatten)]
    pub base: BaseAggregate<CustomerId>,

    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,

    /// Компания, к которой относится клиент
    #[serde(rename = "companyId")]
    pub company_id: Option<String>,

    #[serde(default)]
    pub status: RecordStatus,
}

impl Customer {
    pub fn new_for_insert(code: String, dto: CustomerDto) -> Self {
        let mut base = BaseAggregate::new(CustomerId::new_v4(), code, dto.description);
        base.comment = dto.comment;

        Self {
            base,
            email: dto.email.unwrap_or_default(),
            phone: dto.phone.unwrap_or_default(),
            company_id: dto.company_id,
            status: dto.status.unwrap_or_default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn name(&self) -> &str {
        &self.base.description
    }

    pub fn apply_patch(&mut self, patch: &CustomerPatch) {
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
        if let Some(company_id) = &patch.company_id {
            self.company_id = company_id.clone();
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
        if self.email.trim().is_empty() {
            return Err(FieldError::required("email"));
        }
        if !self.email.contains('@') {
            return Err(FieldError::new("email", "email must contain '@'"));
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CustomerDto {
    pub code: Option<String>,
    pub description: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "companyId")]
    pub company_id: Option<String>,
    pub status: Option<RecordStatus>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CustomerPatch {
    pub code: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "companyId")]
    pub company_id: Option<Option<String>>,
    pub status: Option<RecordStatus>,
    pub comment: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer::new_for_insert(
            "CUS-0001".to_string(),
            CustomerDto {
                description: "Nancy Davolio".to_string(),
                email: Some("nancy@contoso.com".to_string()),
                company_id: Some("c-1".to_string()),
                ..CustomerDto::default()
            },
        )
    }

    #[test]
    fn test_json_uses_flat_camel_case_fields() {
        let json = serde_json::to_value(customer()).unwrap();

        assert_eq!(json["code"], "CUS-0001");
        assert_eq!(json["companyId"], "c-1");
        assert_eq!(json["status"], "active");
        assert!(json["metadata"]["createdAt"].is_string());
        assert!(json.get("base").is_none());
    }

    #[test]
    fn test_patch_distinguishes_unset_from_cleared() {
        let mut c = customer();

        c.apply_patch(&CustomerPatch::default());
        assert_eq!(c.company_id.as_deref(), Some("c-1"));

        c.apply_patch(&CustomerPatch {
            company_id: Some(None),
            ..CustomerPatch::default()
        });
        assert_eq!(c.company_id, None);
    }

    #[test]
    fn test_email_is_required() {
        let mut c = customer();
        c.email = "  ".to_string();
        assert_eq!(c.validate().unwrap_err().field, "email");

        c.email = "nancy.contoso.com".to_string();
        assert_eq!(c.validate().unwrap_err().field, "email");
    }
}

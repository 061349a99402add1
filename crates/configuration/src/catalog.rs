//! What the host catalog needs to list this source and lay out its settings form.

/// How the source registers itself with the host catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceType {
    pub value: &'static str,
    pub label: &'static str,
    /// Layout file the host UI uses to render the settings form.
    pub ui_config: &'static str,
    pub external_query_supported: bool,
}

pub const SOURCE_TYPE: SourceType = SourceType {
    value: "DynamoDB",
    label: "DynamoDB",
    ui_config: "dynamoarp-layout.json",
    external_query_supported: true,
};

/// One persisted setting. Tags give each field a stable position on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub tag: u32,
    pub name: &'static str,
    pub label: Option<&'static str>,
    pub required: bool,
    /// Changing a field that does not impact metadata does not force a metadata refresh.
    pub metadata_impacting: bool,
}

impl FieldDescriptor {
    pub(crate) const fn required(tag: u32, name: &'static str) -> Self {
        Self {
            tag,
            name,
            label: None,
            required: true,
            metadata_impacting: true,
        }
    }

    pub(crate) const fn optional(tag: u32, name: &'static str) -> Self {
        Self {
            tag,
            name,
            label: None,
            required: false,
            metadata_impacting: true,
        }
    }

    pub(crate) const fn with_label(self, label: &'static str) -> Self {
        Self {
            label: Some(label),
            ..self
        }
    }

    pub(crate) const fn not_metadata_impacting(self) -> Self {
        Self {
            metadata_impacting: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_as_dynamodb_with_external_query() {
        assert_eq!(
            SOURCE_TYPE,
            SourceType {
                value: "DynamoDB",
                label: "DynamoDB",
                ui_config: "dynamoarp-layout.json",
                external_query_supported: true,
            }
        );
    }

    #[test]
    fn builders_set_only_their_own_flag() {
        let field = FieldDescriptor::optional(2, "maxIdleConnections")
            .with_label("Maximum idle connections")
            .not_metadata_impacting();
        assert_eq!(
            field,
            FieldDescriptor {
                tag: 2,
                name: "maxIdleConnections",
                label: Some("Maximum idle connections"),
                required: false,
                metadata_impacting: false,
            }
        );
        assert!(FieldDescriptor::required(1, "host").required);
        assert!(FieldDescriptor::required(1, "host").metadata_impacting);
    }
}

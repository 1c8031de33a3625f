/// Settings that shape a generated input script, beyond the composition itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Raw `poly_generation.accepted_terms` value; `None` selects the fragment-count default.
    pub accepted_terms: Option<String>,
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    accepted_terms: Option<String>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted_terms(mut self, value: impl Into<String>) -> Self {
        self.accepted_terms = Some(value.into());
        self
    }

    pub fn maybe_accepted_terms(mut self, value: Option<String>) -> Self {
        self.accepted_terms = value;
        self
    }

    pub fn build(self) -> GenerationConfig {
        GenerationConfig {
            accepted_terms: self.accepted_terms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_no_accepted_terms() {
        assert_eq!(GenerationConfigBuilder::new().build(), GenerationConfig::default());
    }

    #[test]
    fn later_setter_wins() {
        let config = GenerationConfigBuilder::new()
            .accepted_terms("all")
            .maybe_accepted_terms(Some("partly-inter".to_string()))
            .build();
        assert_eq!(config.accepted_terms.as_deref(), Some("partly-inter"));
    }
}

//! Option records, static and rendered

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;
use crate::error::CatalogError;

/// One entry of the option catalog, as declared by the caller.
///
/// `disabled` and `highlight` are static flags: a disabled option can never be
/// selected, a highlighted option is emphasized while it sits on the
/// available side. The engine never modifies these records; flags it derives
/// end up on a [`RenderedOption`] instead.
///
/// # Example
///
/// ```
/// use colselect_lib::model::SelectOption;
///
/// let option = SelectOption::new("Foo", 0).disabled();
/// assert!(option.disabled);
/// assert!(!option.highlight);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Human-readable label, also the default filter target.
    pub name: String,
    /// Identifier of the option.
    pub value: Value,
    /// Never selectable.
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    /// Emphasized on the available side.
    #[serde(default, skip_serializing_if = "is_false")]
    pub highlight: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl SelectOption {
    /// Creates a new option with no flags set.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            disabled: false,
            highlight: false,
        }
    }

    /// Marks the option as never selectable.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Marks the option as highlighted.
    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}

impl AsRef<SelectOption> for SelectOption {
    fn as_ref(&self) -> &SelectOption {
        self
    }
}

/// An option as it should be rendered in one of the two lists.
///
/// Borrows the caller's [`SelectOption`] and carries the effective flags:
/// the static flags OR'ed with whatever the engine derived (limit reached,
/// highlight set membership).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedOption<'a> {
    option: &'a SelectOption,
    /// Effective disabled flag.
    pub disabled: bool,
    /// Effective highlight flag.
    pub highlight: bool,
}

impl<'a> RenderedOption<'a> {
    /// Wraps an option, keeping only its static flags.
    pub fn new(option: &'a SelectOption) -> Self {
        Self {
            option,
            disabled: option.disabled,
            highlight: option.highlight,
        }
    }

    /// The underlying catalog entry.
    pub fn option(&self) -> &'a SelectOption {
        self.option
    }

    pub fn name(&self) -> &'a str {
        &self.option.name
    }

    pub fn value(&self) -> &'a Value {
        &self.option.value
    }
}

impl AsRef<SelectOption> for RenderedOption<'_> {
    fn as_ref(&self) -> &SelectOption {
        self.option
    }
}

/// Checks that every option in `catalog` has a distinct value.
///
/// The engine itself never calls this; a catalog with duplicates simply
/// renders duplicate rows.
pub fn validate_catalog(catalog: &[SelectOption]) -> Result<(), CatalogError> {
    let mut seen: HashMap<&Value, usize> = HashMap::with_capacity(catalog.len());
    for (position, option) in catalog.iter().enumerate() {
        if let Some(&first) = seen.get(&option.value) {
            return Err(CatalogError::DuplicateValue {
                value: option.value.clone(),
                first,
                second: position,
            });
        }
        seen.insert(&option.value, position);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_option_keeps_static_flags() {
        let option = SelectOption::new("Foo", 0).disabled().highlighted();
        let rendered = RenderedOption::new(&option);
        assert!(rendered.disabled);
        assert!(rendered.highlight);
        assert_eq!(rendered.name(), "Foo");
        assert_eq!(rendered.value(), &Value::from(0));
    }

    #[test]
    fn test_flags_default_to_false_in_json() {
        let option: SelectOption = serde_json::from_str(r#"{"name":"Foo","value":"foo"}"#).unwrap();
        assert_eq!(option, SelectOption::new("Foo", "foo"));
        assert_eq!(
            serde_json::to_string(&option).unwrap(),
            r#"{"name":"Foo","value":"foo"}"#
        );
    }

    #[test]
    fn test_fractional_values_in_json() {
        let catalog: Vec<SelectOption> = serde_json::from_str(
            r#"[{"name":"Half","value":1.5},{"name":"One","value":1.0},{"name":"Two","value":2}]"#,
        )
        .unwrap();
        assert_eq!(catalog[0], SelectOption::new("Half", 1.5));
        assert_eq!(catalog[1].value, Value::from(1));
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_validate_catalog_accepts_unique_values() {
        let catalog = vec![SelectOption::new("A", 0), SelectOption::new("B", "0")];
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_validate_catalog_reports_duplicates() {
        let catalog = vec![
            SelectOption::new("A", 0),
            SelectOption::new("B", 1),
            SelectOption::new("C", 0),
        ];
        assert_eq!(
            validate_catalog(&catalog),
            Err(CatalogError::DuplicateValue {
                value: Value::from(0),
                first: 0,
                second: 2,
            })
        );
    }
}

//! Field encoding policies.
//!
//! A single table decides how individual field names are treated when the
//! typed model is lowered into canonical values and when parsed documents are
//! raised back.

/// How a field is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Key material: canonicalized as `Value::Bytes`, emitted with the `base64:` marker.
    SecretBytes,
    /// Producer bookkeeping (schema type tags). Dropped on import.
    TypeMarker,
}

/// Field name to policy table. Names are matched after key normalization
/// (camelCase).
pub const FIELD_POLICIES: &[(&str, FieldPolicy)] = &[
    ("psk", FieldPolicy::SecretBytes),
    ("publicKey", FieldPolicy::SecretBytes),
    ("privateKey", FieldPolicy::SecretBytes),
    ("adminKey", FieldPolicy::SecretBytes),
    ("$typeName", FieldPolicy::TypeMarker),
    ("@type", FieldPolicy::TypeMarker),
];

/// Look up the policy for a field name, if any.
pub fn policy_for(field: &str) -> Option<FieldPolicy> {
    FIELD_POLICIES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, policy)| *policy)
}

pub fn is_secret(field: &str) -> bool {
    policy_for(field) == Some(FieldPolicy::SecretBytes)
}

pub fn is_type_marker(field: &str) -> bool {
    policy_for(field) == Some(FieldPolicy::TypeMarker)
}

/// Convert a snake_case key to camelCase. Keys without underscores pass through.
///
/// `module_config` becomes `moduleConfig`, `use_12h_clock` becomes `use12hClock`.
pub fn camel_case(key: &str) -> String {
    if !key.contains('_') {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for (i, c) in key.chars().enumerate() {
        if c == '_' && i > 0 {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

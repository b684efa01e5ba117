//! UUID shape validation.

use uuid::Uuid;

const HYPHENATED_LEN: usize = 36;
const MAX_VERSION: usize = 5;

/// Whether `value` is exactly a hyphenated UUID of version 0 to 5 with a
/// variant nibble of `0`, `8`, `9`, `a`, or `b`.
///
/// Hex digits are matched case-insensitively. Surrounding text, braces, and
/// the simple or URN forms are rejected.
///
/// # Examples
///
/// ```
/// use prog_utils::is_uuid;
///
/// assert!(is_uuid("5a8d963c-3a73-40de-9806-1400f905271b"));
/// assert!(!is_uuid("5a8d963c3a7340de98061400f905271b"));
/// ```
#[must_use]
pub fn is_uuid(value: &str) -> bool {
    if value.len() != HYPHENATED_LEN {
        return false;
    }
    let Ok(parsed) = Uuid::try_parse(value) else {
        return false;
    };
    let variant_nibble = parsed.as_bytes().get(8).map(|byte| byte >> 4);
    parsed.get_version_num() <= MAX_VERSION
        && matches!(variant_nibble, Some(0x0 | 0x8 | 0x9 | 0xa | 0xb))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("5a8d963c-3a73-40de-9806-1400f905271b")]
    #[case("5A8D963C-3A73-40DE-9806-1400F905271B")]
    #[case("00000000-0000-0000-0000-000000000000")]
    #[case("5a8d963c-3a73-50de-b806-1400f905271b")]
    #[case("5a8d963c-3a73-10de-0806-1400f905271b")]
    fn accepts_hyphenated_uuids(#[case] value: &str) {
        assert!(is_uuid(value));
    }

    #[rstest]
    #[case::embedded("test value with uuid 5a8d963c-3a73-40de-9806-1400f905271b")]
    #[case::short("7")]
    #[case::empty("")]
    #[case::word("teststring")]
    #[case::blank("  ")]
    #[case::simple("5a8d963c3a7340de98061400f905271b")]
    #[case::braced("{5a8d963c-3a73-40de-9806-1400f905271b}")]
    #[case::version_six("5a8d963c-3a73-60de-9806-1400f905271b")]
    #[case::variant_c("5a8d963c-3a73-40de-c806-1400f905271b")]
    #[case::variant_seven("5a8d963c-3a73-40de-7806-1400f905271b")]
    #[case::non_hex("5a8d963c-3a73-40de-9806-1400f905271z")]
    fn rejects_other_text(#[case] value: &str) {
        assert!(!is_uuid(value));
    }
}

use std::collections::HashSet;

use super::super::Rule;
use crate::{builder::EnumBuilder, error::Violation};

/// How many members fit derived values (`0`, then `1 << (i - 1)`) without
/// overflowing the underlying type. Enums default to `int`; unknown types are
/// held to the `long` range that values are stored in.
fn derived_flags_capacity(underlying_type: Option<&str>) -> usize {
    let value_bits = match underlying_type.map(|ty| ty.trim_start_matches("System.")) {
        Some("byte" | "Byte") => 8,
        Some("sbyte" | "SByte") => 7,
        Some("short" | "Int16") => 15,
        Some("ushort" | "UInt16") => 16,
        None | Some("int" | "Int32") => 31,
        Some("uint" | "UInt32") => 32,
        _ => 63,
    };
    value_bits + 1
}

pub(crate) struct UniqueEnumMembers;

impl Rule<EnumBuilder> for UniqueEnumMembers {
    fn name(&self) -> &'static str {
        "unique-enum-members"
    }

    fn description(&self) -> &'static str {
        "Enum members have distinct names"
    }

    fn check(&self, enumeration: &EnumBuilder) -> Result<(), Violation> {
        let mut seen = HashSet::new();
        for name in enumeration.members.iter().filter_map(|m| m.name.as_deref()) {
            if !seen.insert(name) {
                return Err(Violation::DuplicateEnumMember {
                    member: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

pub(crate) struct FlagsCapacity;

impl Rule<EnumBuilder> for FlagsCapacity {
    fn name(&self) -> &'static str {
        "flags-capacity"
    }

    fn description(&self) -> &'static str {
        "Derived flag values fit the enum's underlying type"
    }

    fn check(&self, enumeration: &EnumBuilder) -> Result<(), Violation> {
        let count = enumeration.members.len();
        let capacity = derived_flags_capacity(enumeration.underlying_type.as_deref());
        if enumeration.derives_values() && count > capacity {
            return Err(Violation::TooManyFlags { count, capacity });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_lift_capacity() {
        let mut e = EnumBuilder::new();
        e.make_flags();
        for i in 0..70 {
            e.add_member_with_value(format!("F{}", i), i).unwrap();
        }
        assert!(FlagsCapacity.check(&e).is_ok());
    }

    #[test]
    fn test_capacity_follows_underlying_type() {
        assert_eq!(derived_flags_capacity(None), 32);
        assert_eq!(derived_flags_capacity(Some("byte")), 9);
        assert_eq!(derived_flags_capacity(Some("System.SByte")), 8);
        assert_eq!(derived_flags_capacity(Some("ushort")), 17);
        assert_eq!(derived_flags_capacity(Some("uint")), 33);
        assert_eq!(derived_flags_capacity(Some("long")), 64);
        assert_eq!(derived_flags_capacity(Some("ulong")), 64);
    }

    #[test]
    fn test_byte_flags_reject_a_tenth_member() {
        let mut e = EnumBuilder::new();
        e.make_flags()
            .with_underlying_type("byte")
            .unwrap()
            .add_member_names((0..9).map(|i| format!("F{}", i)))
            .unwrap();
        assert!(FlagsCapacity.check(&e).is_ok());

        e.add_member_named("F9").unwrap();
        assert_eq!(
            FlagsCapacity.check(&e),
            Err(Violation::TooManyFlags {
                count: 10,
                capacity: 9
            })
        );
    }

    #[test]
    fn test_plain_enum_has_no_capacity_limit() {
        let mut e = EnumBuilder::new();
        e.add_member_names((0..70).map(|i| format!("F{}", i))).unwrap();
        assert!(FlagsCapacity.check(&e).is_ok());
    }
}

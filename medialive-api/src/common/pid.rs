use std::ops::RangeInclusive;

use crate::ModelError;

/// Packet identifiers that may be assigned to elementary streams and tables.
/// Values below 32 are reserved by MPEG-TS and 8191 is the null packet PID.
pub const PID_RANGE: RangeInclusive<u16> = 32..=8182;

/// Parses a single PID written in decimal (`482`) or hexadecimal (`0x1e2`).
pub fn parse_pid(field: &'static str, value: &str) -> Result<u16, ModelError> {
    let value = value.trim();
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => value.parse::<u16>(),
    };

    let pid = parsed.map_err(|_| ModelError::invalid(field, format!("{value:?} is not a PID")))?;
    if !PID_RANGE.contains(&pid) {
        return Err(ModelError::OutOfRange {
            field,
            value: pid.to_string(),
            expected: format!("a PID in [{}, {}] range", PID_RANGE.start(), PID_RANGE.end()),
        });
    }
    Ok(pid)
}

/// Parses a PID list where entries are separated by commas and may be
/// inclusive ranges, e.g. `"482-492, 0x1f0"`.
pub fn parse_pid_list(field: &'static str, value: &str) -> Result<Vec<u16>, ModelError> {
    let mut pids = Vec::new();
    for entry in value.split(',').map(str::trim) {
        if entry.is_empty() {
            return Err(ModelError::invalid(field, "empty entry in PID list"));
        }
        match entry.split_once('-') {
            Some((start, end)) => {
                let start = parse_pid(field, start)?;
                let end = parse_pid(field, end)?;
                if start > end {
                    return Err(ModelError::invalid(
                        field,
                        format!("PID range {entry:?} ends before it starts"),
                    ));
                }
                pids.extend(start..=end);
            }
            None => pids.push(parse_pid(field, entry)?),
        }
    }
    Ok(pids)
}

pub(crate) fn check_pid(field: &'static str, value: Option<&String>) -> Result<(), ModelError> {
    match value {
        Some(value) => parse_pid(field, value).map(|_| ()),
        None => Ok(()),
    }
}

pub(crate) fn check_pid_list(
    field: &'static str,
    value: Option<&String>,
) -> Result<(), ModelError> {
    match value {
        Some(value) => parse_pid_list(field, value).map(|_| ()),
        None => Ok(()),
    }
}

pub(crate) fn check_pid_number(field: &'static str, value: Option<i32>) -> Result<(), ModelError> {
    let start = i32::from(*PID_RANGE.start());
    let end = i32::from(*PID_RANGE.end());
    super::check_range(field, value, start..=end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decimal_and_hex_pids() {
        assert_eq!(parse_pid("videoPid", "481"), Ok(481));
        assert_eq!(parse_pid("videoPid", "0x1e1"), Ok(481));
        assert_eq!(parse_pid("videoPid", " 0X20 "), Ok(32));
    }

    #[test]
    fn reject_reserved_pids() {
        assert!(matches!(
            parse_pid("pmtPid", "31"),
            Err(ModelError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_pid("pmtPid", "0x1fff"),
            Err(ModelError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_pid("pmtPid", "abc"),
            Err(ModelError::Invalid { .. })
        ));
    }

    #[test]
    fn parse_pid_ranges() {
        assert_eq!(
            parse_pid_list("audioPids", "482-484, 0x1f0"),
            Ok(vec![482, 483, 484, 496])
        );
        assert!(parse_pid_list("audioPids", "484-482").is_err());
        assert!(parse_pid_list("audioPids", "482,,483").is_err());
    }
}

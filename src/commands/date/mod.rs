// src/commands/date/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use chrono::{DateTime, Local, TimeZone, Utc};

pub struct DateCommand;

/// `Tue Jan 15 12:00:00 <TZ> 2024`
const DEFAULT_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

#[async_trait]
impl Command for DateCommand {
    fn name(&self) -> &'static str { "date" }

    // Arguments are ignored; the default format is always used.
    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let now = Utc::now();
        let output = if ctx.utc {
            format_timestamp(&now)
        } else {
            let local: DateTime<Local> = now.into();
            format_timestamp(&local)
        };
        CommandResult::success(output)
    }
}

/// Render `dt` in the shell's default `date` layout. UTC renders its zone
/// as the literal `UTC`; other zones render their offset.
pub fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(DEFAULT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::make_ctx;
    use chrono::FixedOffset;
    use regex_lite::Regex;

    fn shape() -> Regex {
        Regex::new(r"^(Mon|Tue|Wed|Thu|Fri|Sat|Sun) (Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) \d{2} \d{2}:\d{2}:\d{2} \S+ \d{4}$").unwrap()
    }

    #[test]
    fn test_format_fixed_utc() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(&dt), "Mon Jan 15 12:00:00 UTC 2024");
    }

    #[test]
    fn test_format_pads_day() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 4, 7, 5, 9).unwrap();
        assert_eq!(format_timestamp(&dt), "Sun Oct 04 07:05:09 UTC 2026");
    }

    #[test]
    fn test_format_fixed_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = tz.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(&dt), "Mon Jan 15 12:00:00 +02:00 2024");
    }

    #[tokio::test]
    async fn test_date_local_shape() {
        let r = DateCommand.execute(make_ctx("", "~")).await;
        assert!(shape().is_match(&r.output), "unexpected date output: {}", r.output);
        assert_eq!(r.error, "");
    }

    #[tokio::test]
    async fn test_date_utc() {
        let mut ctx = make_ctx("+%Y", "~");
        ctx.utc = true;
        let r = DateCommand.execute(ctx).await;
        assert!(shape().is_match(&r.output));
        assert!(r.output.contains(" UTC "));
    }
}

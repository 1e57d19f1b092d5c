// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Text rendering for the gist.

use crate::models::TodoistStats;

/// Render stats as gist lines, always in the same order and always all five.
///
/// Karma, the all-time total and the streak are grouped; the daily and
/// weekly counts are printed as plain integers.
pub fn render_lines(stats: &TodoistStats) -> Vec<String> {
    vec![
        format!("🏆 {} Karma Points", humanize_number(stats.karma)),
        format!("🌞 Completed {} tasks today", stats.today_completed),
        format!("📅 Completed {} tasks this week", stats.week_completed),
        format!(
            "✅ Completed {} tasks so far",
            humanize_number(stats.completed_count as f64)
        ),
        format!(
            "⌛ Current streak is {} days",
            humanize_number(f64::from(stats.streak))
        ),
    ]
}

/// Format a number with `,` thousands separators.
///
/// The fractional part, if any, is kept as-is: `12345.5` -> `12,345.5`.
pub fn humanize_number(value: f64) -> String {
    let raw = value.to_string();
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> TodoistStats {
        TodoistStats {
            karma: 48213.0,
            completed_count: 10342,
            today_completed: 7,
            week_completed: 52,
            streak: 4,
        }
    }

    #[test]
    fn test_humanize_number() {
        assert_eq!(humanize_number(0.0), "0");
        assert_eq!(humanize_number(999.0), "999");
        assert_eq!(humanize_number(1000.0), "1,000");
        assert_eq!(humanize_number(48213.0), "48,213");
        assert_eq!(humanize_number(1234567.0), "1,234,567");
        assert_eq!(humanize_number(12345.5), "12,345.5");
        assert_eq!(humanize_number(-1234.0), "-1,234");
    }

    #[test]
    fn test_render_lines_order_and_format() {
        let lines = render_lines(&sample_stats());

        assert_eq!(
            lines,
            vec![
                "🏆 48,213 Karma Points",
                "🌞 Completed 7 tasks today",
                "📅 Completed 52 tasks this week",
                "✅ Completed 10,342 tasks so far",
                "⌛ Current streak is 4 days",
            ]
        );
    }

    #[test]
    fn test_render_daily_and_weekly_counts_ungrouped() {
        let stats = TodoistStats {
            karma: 1500.0,
            completed_count: 1234,
            today_completed: 1500,
            week_completed: 1234,
            streak: 1000,
        };

        let lines = render_lines(&stats);

        assert_eq!(lines[0], "🏆 1,500 Karma Points");
        assert_eq!(lines[1], "🌞 Completed 1500 tasks today");
        assert_eq!(lines[2], "📅 Completed 1234 tasks this week");
        assert_eq!(lines[3], "✅ Completed 1,234 tasks so far");
        assert_eq!(lines[4], "⌛ Current streak is 1,000 days");
    }

    #[test]
    fn test_render_keeps_zero_lines() {
        let stats = TodoistStats {
            karma: 0.0,
            completed_count: 0,
            today_completed: 0,
            week_completed: 0,
            streak: 0,
        };

        let lines = render_lines(&stats);

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "🌞 Completed 0 tasks today");
        assert_eq!(lines[4], "⌛ Current streak is 0 days");
    }

    #[test]
    fn test_render_is_deterministic() {
        let stats = sample_stats();
        assert_eq!(render_lines(&stats).join("\n"), render_lines(&stats).join("\n"));
    }
}

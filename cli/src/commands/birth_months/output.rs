//! Output formatting for birth-months command results.

use db::queries::birth_months::BirthMonthInfo;
use db::UserInfo;

use crate::output::{user_label, Outputable};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(month: i64) -> String {
    usize::try_from(month - 1)
        .ok()
        .and_then(|i| MONTH_NAMES.get(i))
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("month {}", month))
}

fn push_month(lines: &mut Vec<String>, heading: &str, month: Option<i64>, users: &[UserInfo]) {
    let Some(month) = month else {
        return;
    };
    lines.push(String::new());
    lines.push(format!(
        "{}: {} ({} user(s))",
        heading,
        month_name(month),
        users.len()
    ));
    for user in users {
        lines.push(format!("  {}", user_label(user)));
    }
}

impl Outputable for BirthMonthInfo {
    fn to_table(&self) -> String {
        let mut lines = vec![format!(
            "Birth months ({} user(s) with a birth month)",
            self.total_users
        )];

        if self.total_users == 0 {
            lines.push(String::new());
            lines.push("No birth months recorded.".to_string());
            return lines.join("\n");
        }

        push_month(
            &mut lines,
            "Most common",
            self.most_common_month,
            &self.most_common_month_users,
        );
        push_month(
            &mut lines,
            "Least common",
            self.least_common_month,
            &self.least_common_month_users,
        );

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::month_name;
    use rstest::rstest;

    #[rstest]
    #[case(1, "January")]
    #[case(12, "December")]
    #[case(0, "month 0")]
    #[case(13, "month 13")]
    fn test_month_name(#[case] month: i64, #[case] expected: &str) {
        assert_eq!(month_name(month), expected);
    }
}

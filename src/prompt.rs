//! フィルタの対話入力

use crate::error::{HygieneError, Result};
use chrono::NaiveDate;
use dialoguer::{Input, Select};
use hygiene_common::summary::ZONE_LABEL;
use hygiene_common::{FilterField, HygieneFilters, Zone};

/// エリアと期間を順に尋ねる（空欄は未指定）
pub fn prompt_filters(initial: &HygieneFilters) -> Result<HygieneFilters> {
    let mut filters = initial.clone();

    let mut items: Vec<&str> = vec!["(指定なし)"];
    items.extend(Zone::ALL.iter().map(|z| z.label()));
    let current = initial
        .zone
        .and_then(|zone| Zone::ALL.iter().position(|z| *z == zone))
        .map_or(0, |i| i + 1);

    let choice = Select::new()
        .with_prompt(ZONE_LABEL)
        .items(&items)
        .default(current)
        .interact()
        .map_err(|e| HygieneError::Prompt(e.to_string()))?;
    filters.zone = zone_for_choice(choice);

    let start = ask_date("Start Date (YYYY-MM-DD)", initial.start_date)?;
    filters.set(FilterField::StartDate, &start);
    let end = ask_date("End Date (YYYY-MM-DD)", initial.end_date)?;
    filters.set(FilterField::EndDate, &end);

    Ok(filters)
}

/// 0 は「指定なし」
fn zone_for_choice(choice: usize) -> Option<Zone> {
    choice.checked_sub(1).and_then(|i| Zone::ALL.get(i).copied())
}

fn ask_date(prompt: &str, initial: Option<NaiveDate>) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial.map(|d| d.to_string()).unwrap_or_default())
        .allow_empty(true)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            let trimmed = input.trim();
            if trimmed.is_empty() || NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok() {
                Ok(())
            } else {
                Err("YYYY-MM-DD 形式で入力してください".to_string())
            }
        })
        .interact_text()
        .map_err(|e| HygieneError::Prompt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_for_choice() {
        assert_eq!(zone_for_choice(0), None);
        assert_eq!(zone_for_choice(1), Some(Zone::All));
        assert_eq!(zone_for_choice(4), Some(Zone::BarSection));
        assert_eq!(zone_for_choice(9), None);
    }
}

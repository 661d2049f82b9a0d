use chrono::{Local, TimeZone};

use super::view_model::{GoalCardView, GoalListView, Thumbnail};
use crate::constants::{COMPLETED_MARKER, HISTORY_SUMMARY_LEN, THUMBNAIL_PLACEHOLDER};
use crate::goals::Goal;
use crate::utils::format::{format_timestamp, format_yen};

const EMPTY_LIST_MESSAGE: &str = "まだ目標がありません。上のフォームから追加してみましょう。";
const EMPTY_HISTORY_MESSAGE: &str = "まだがまん履歴はありません";
const HISTORY_PREFIX: &str = "最近のがまん：";

/// `floor(min(100, saved / target * 100))`. A zero target (malformed stored
/// data) yields 0.
pub fn progress_percent(saved: u64, target: u64) -> u8 {
    if target == 0 {
        return 0;
    }
    let pct = (saved as u128 * 100) / target as u128;
    pct.min(100) as u8
}

/// Renders the goals with timestamps in the local time zone.
pub fn render_goals(goals: &[Goal], quick_add_amounts: &[u64]) -> GoalListView {
    render_goals_in(goals, quick_add_amounts, &Local)
}

/// Renders the goals with timestamps in `tz`.
pub fn render_goals_in<Tz: TimeZone>(
    goals: &[Goal],
    quick_add_amounts: &[u64],
    tz: &Tz,
) -> GoalListView
where
    Tz::Offset: std::fmt::Display,
{
    if goals.is_empty() {
        return GoalListView::Empty {
            message: EMPTY_LIST_MESSAGE.to_string(),
        };
    }
    GoalListView::Goals {
        cards: goals
            .iter()
            .map(|goal| render_goal_card(goal, quick_add_amounts, tz))
            .collect(),
    }
}

pub fn render_goal_card<Tz: TimeZone>(
    goal: &Goal,
    quick_add_amounts: &[u64],
    tz: &Tz,
) -> GoalCardView
where
    Tz::Offset: std::fmt::Display,
{
    let percent = progress_percent(goal.saved, goal.target);

    let title = if goal.completed {
        format!("{}{}", goal.name, COMPLETED_MARKER)
    } else {
        goal.name.clone()
    };

    let thumbnail = match &goal.image {
        Some(image) => Thumbnail::Image {
            src: image.as_str().to_string(),
            alt: goal.name.clone(),
        },
        None => Thumbnail::Placeholder {
            glyph: THUMBNAIL_PLACEHOLDER.to_string(),
        },
    };

    GoalCardView {
        goal_id: goal.id.clone(),
        title,
        thumbnail,
        amount_label: format!(
            "{} / {}（{}%）",
            format_yen(goal.saved),
            format_yen(goal.target),
            percent
        ),
        percent,
        progress_width: format!("{}%", percent),
        history_summary: history_summary(goal, tz),
        quick_add_amounts: quick_add_amounts.to_vec(),
        completed: goal.completed,
    }
}

fn history_summary<Tz: TimeZone>(goal: &Goal, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if goal.history.is_empty() {
        return EMPTY_HISTORY_MESSAGE.to_string();
    }
    let latest = goal
        .history
        .iter()
        .take(HISTORY_SUMMARY_LEN)
        .map(|entry| {
            format!(
                "{}：+{}",
                format_timestamp(entry.timestamp, tz),
                format_yen(entry.amount)
            )
        })
        .collect::<Vec<_>>()
        .join(" / ");
    format!("{}{}", HISTORY_PREFIX, latest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::Contribution;
    use crate::images::ImageRef;
    use chrono::Utc;

    fn goal(saved: u64, target: u64) -> Goal {
        Goal {
            id: "g1".to_string(),
            name: "Camera".to_string(),
            target,
            saved,
            image: None,
            history: Vec::new(),
            completed: false,
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 50000), 0);
        assert_eq!(progress_percent(20000, 50000), 40);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 66);
        assert_eq!(progress_percent(50000, 50000), 100);
        assert_eq!(progress_percent(90000, 50000), 100);
        assert_eq!(progress_percent(5, 0), 0);
        assert_eq!(progress_percent(u64::MAX, 1), 100);
    }

    #[test]
    fn test_empty_collection_renders_placeholder() {
        let view = render_goals_in(&[], &[100], &Utc);
        assert!(view.is_empty());
        assert!(view.cards().is_empty());
    }

    #[test]
    fn test_card_labels() {
        let card = render_goal_card(&goal(20000, 50000), &[100, 500], &Utc);
        assert_eq!(card.title, "Camera");
        assert_eq!(card.amount_label, "￥20,000 / ￥50,000（40%）");
        assert_eq!(card.percent, 40);
        assert_eq!(card.progress_width, "40%");
        assert_eq!(card.history_summary, "まだがまん履歴はありません");
        assert_eq!(card.quick_add_amounts, vec![100, 500]);
        assert_eq!(
            card.thumbnail,
            Thumbnail::Placeholder {
                glyph: "📦".to_string()
            }
        );
    }

    #[test]
    fn test_completed_card_is_marked() {
        let mut g = goal(60000, 50000);
        g.completed = true;
        let card = render_goal_card(&g, &[], &Utc);
        assert_eq!(card.title, "Camera ✅");
        assert_eq!(card.amount_label, "￥60,000 / ￥50,000（100%）");
    }

    #[test]
    fn test_malformed_zero_target_renders_zero_percent() {
        let card = render_goal_card(&goal(300, 0), &[], &Utc);
        assert_eq!(card.percent, 0);
        assert_eq!(card.amount_label, "￥300 / ￥0（0%）");
    }

    #[test]
    fn test_history_shows_three_most_recent() {
        let mut g = goal(1000, 50000);
        let base = 1_704_164_645_000; // 2024/01/02 03:04 UTC
        g.history = (0..5)
            .map(|i| Contribution {
                amount: 100 * (5 - i),
                timestamp: base - i as i64 * 60_000,
            })
            .collect();
        let card = render_goal_card(&g, &[], &Utc);
        assert_eq!(
            card.history_summary,
            "最近のがまん：2024/01/02 03:04：+￥500 / 2024/01/02 03:03：+￥400 / 2024/01/02 03:02：+￥300"
        );
    }

    #[test]
    fn test_image_thumbnail_uses_name_as_alt() {
        let mut g = goal(0, 100);
        g.image = Some(ImageRef::new("data:image/png;base64,AA=="));
        let card = render_goal_card(&g, &[], &Utc);
        assert_eq!(
            card.thumbnail,
            Thumbnail::Image {
                src: "data:image/png;base64,AA==".to_string(),
                alt: "Camera".to_string()
            }
        );
    }

    #[test]
    fn test_cards_keep_collection_order() {
        let mut a = goal(0, 100);
        a.id = "a".into();
        let mut b = goal(0, 100);
        b.id = "b".into();
        let view = render_goals_in(&[b, a], &[], &Utc);
        let ids: Vec<_> = view.cards().iter().map(|c| c.goal_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}

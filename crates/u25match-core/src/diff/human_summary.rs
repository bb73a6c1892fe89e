//! Human-readable confirmation text for a profile diff.

use crate::diff::fields::ProfileField;
use crate::diff::model::ProfileDiff;

pub const NO_CHANGES_TEXT: &str = "変更はありません";
pub const CONFIRM_HEADER: &str = "以下の項目を変更します:";

/// Render the confirmation prompt listing what a save will change.
///
/// One line per changed top-level field, using its display label. The
/// details line also names the changed nested fields.
///
/// ```text
/// 以下の項目を変更します:
/// - 名前
/// - 詳細情報 (身長, 体重)
/// ```
pub fn render_change_summary(diff: &ProfileDiff) -> String {
    let fields = diff.changed_fields();
    if fields.is_empty() {
        return format!("{NO_CHANGES_TEXT}\n");
    }

    let mut out = String::new();
    out.push_str(CONFIRM_HEADER);
    out.push('\n');

    for field in fields {
        out.push_str("- ");
        out.push_str(field.label());
        if field == ProfileField::Details {
            if let Some(details) = &diff.details {
                let labels: Vec<&str> = details
                    .changed_fields()
                    .iter()
                    .map(|f| f.label())
                    .collect();
                out.push_str(&format!(" ({})", labels.join(", ")));
            }
        }
        if field == ProfileField::Tags {
            if let Some(tags) = &diff.tags {
                out.push_str(&format!(" ({}件)", tags.len()));
            }
        }
        out.push('\n');
    }

    out
}

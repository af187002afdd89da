use anyhow::Result;
use memo_search_tui::NavigationRequest;
use serde_json::json;

use crate::workflow::ScreenOutcome;

/// Print a plain-text representation of the screen outcome.
pub(crate) fn print_plain(outcome: &ScreenOutcome) {
	println!("{}", format_plain(outcome));
}

fn format_plain(outcome: &ScreenOutcome) -> String {
	match (&outcome.request, &outcome.memo) {
		(NavigationRequest::Remove { .. }, _) => {
			format!("Search closed ({})", outcome.request)
		}
		(NavigationRequest::Replace { .. }, Some(memo)) if memo.is_secret => {
			format!("{}\t{}", memo.id, outcome.secret_placeholder)
		}
		(NavigationRequest::Replace { .. }, Some(memo)) => format!("{}\t{}", memo.id, memo.title),
		(NavigationRequest::Replace { .. }, None) => outcome.request.to_string(),
	}
}

/// Format the screen outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &ScreenOutcome) -> Result<String> {
	let memo = match &outcome.memo {
		Some(memo) => json!({
			"id": memo.id,
			"title": if memo.is_secret { None } else { Some(memo.title.as_str()) },
			"is_secret": memo.is_secret,
			"is_favorite": memo.is_favorite,
			"category_id": memo.category_id,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"request": serde_json::to_value(outcome.request)?,
		"memo": memo,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the screen outcome.
pub(crate) fn print_json(outcome: &ScreenOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

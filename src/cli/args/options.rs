use clap::ValueEnum;

/// Memo lists the search screen can be opened from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ListArg {
	All,
	Favorites,
	#[value(alias = "category")]
	Added,
}

impl ListArg {
	/// Return the mode string consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ListArg::All => "all",
			ListArg::Favorites => "favorites",
			ListArg::Added => "added",
		}
	}
}

/// Policies for reconciling overlapping search responses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OrderingArg {
	#[value(name = "latest_query", alias = "latest-query")]
	LatestQuery,
	#[value(name = "last_response", alias = "last-response")]
	LastResponse,
}

impl OrderingArg {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			OrderingArg::LatestQuery => "latest_query",
			OrderingArg::LastResponse => "last_response",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

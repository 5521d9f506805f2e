use std::fmt;

use crate::dom::NodeId;

/// Interaction event category, first element of a `trackEvent` tuple's
/// payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Open,
    Play,
    Download,
    Print,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Open => "Open",
            EventCategory::Play => "Play",
            EventCategory::Download => "Download",
            EventCategory::Print => "Print",
        }
    }
}

/// One command appended to the tracking queue. The external analytics agent
/// consumes these as opaque tuples; `name` and `args` render that wire form.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerCommand {
    // Bootstrap, enqueued once by the agent.
    SetTrackerUrl(String),
    SetSiteId(String),

    // Per-page base sequence.
    DeleteCustomVariables { scope: &'static str },
    SetDocumentTitle(String),
    SetGenerationTimeMs(u64),
    TrackPageView,
    TrackContentImpressionsWithinNode(NodeId),
    TrackAllContentImpressions,
    EnableLinkTracking,

    // Interaction events.
    TrackEvent {
        category: EventCategory,
        action: String,
        name: String,
    },
}

/// Tuple argument: string, number, or a document-node reference.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandArg {
    Str(String),
    Num(u64),
    Node(NodeId),
}

impl TrackerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            TrackerCommand::SetTrackerUrl(_) => "setTrackerUrl",
            TrackerCommand::SetSiteId(_) => "setSiteId",
            TrackerCommand::DeleteCustomVariables { .. } => "deleteCustomVariables",
            TrackerCommand::SetDocumentTitle(_) => "setDocumentTitle",
            TrackerCommand::SetGenerationTimeMs(_) => "setGenerationTimeMs",
            TrackerCommand::TrackPageView => "trackPageView",
            TrackerCommand::TrackContentImpressionsWithinNode(_) => {
                "trackContentImpressionsWithinNode"
            }
            TrackerCommand::TrackAllContentImpressions => "trackAllContentImpressions",
            TrackerCommand::EnableLinkTracking => "enableLinkTracking",
            TrackerCommand::TrackEvent { .. } => "trackEvent",
        }
    }

    pub fn args(&self) -> Vec<CommandArg> {
        match self {
            TrackerCommand::SetTrackerUrl(url) => vec![CommandArg::Str(url.clone())],
            TrackerCommand::SetSiteId(id) => vec![CommandArg::Str(id.clone())],
            TrackerCommand::DeleteCustomVariables { scope } => {
                vec![CommandArg::Str(scope.to_string())]
            }
            TrackerCommand::SetDocumentTitle(title) => vec![CommandArg::Str(title.clone())],
            TrackerCommand::SetGenerationTimeMs(ms) => vec![CommandArg::Num(*ms)],
            TrackerCommand::TrackPageView => Vec::new(),
            TrackerCommand::TrackContentImpressionsWithinNode(node) => {
                vec![CommandArg::Node(*node)]
            }
            TrackerCommand::TrackAllContentImpressions => Vec::new(),
            TrackerCommand::EnableLinkTracking => Vec::new(),
            TrackerCommand::TrackEvent {
                category,
                action,
                name,
            } => vec![
                CommandArg::Str(category.as_str().to_string()),
                CommandArg::Str(action.clone()),
                CommandArg::Str(name.clone()),
            ],
        }
    }
}

impl fmt::Display for CommandArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandArg::Str(s) => write!(f, "'{}'", s),
            CommandArg::Num(n) => write!(f, "{}", n),
            CommandArg::Node(id) => write!(f, "{:?}", id),
        }
    }
}

impl fmt::Display for TrackerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        for (i, arg) in self.args().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

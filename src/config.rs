//! Customization settings, loadable from TOML. Defaults mirror the values
//! the institution ships in production so the demo runs without a file.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tracker: TrackerConfig,
    pub footer: FooterConfig,
    pub header: HeaderConfig,
    pub gridview: GridViewConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Analytics agent endpoint. Consumed by the agent bootstrap, not the
/// binder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Base URL of the analytics install, with trailing slash.
    pub url: String,
    pub site_id: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            url: "https://analytics.libraries.psu.edu/matomo/".to_string(),
            site_id: "3".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Institutional footer markup installed into the footer wrapper.
    pub html: String,
    /// LibAnswers chat widget hash; also names the chat mount div.
    pub chat_hash: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            html: DEFAULT_FOOTER_HTML.to_string(),
            chat_hash: "d51e38627705fc23934afaba4f563cc8".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Where the header logo should link instead of the platform landing
    /// page.
    pub logo_url: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            logo_url: "https://libraries.psu.edu/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridViewConfig {
    /// Collections whose search results are forced into grid view.
    pub collections: HashSet<String>,
}

impl Default for GridViewConfig {
    fn default() -> Self {
        Self {
            collections: ["arthist2", "palmer", "wwbldgs"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

const DEFAULT_FOOTER_HTML: &str = concat!(
    "<footer class=\"footer\"><section class=\"row\">",
    "<div class=\"footer__logo\"><a href=\"http://www.psu.edu/\">",
    "<img alt=\"Penn State University mark\" ",
    "src=\"https://libraries.psu.edu/sites/all/themes/custom/f5_psul/images/ul/psu_mark_footer.png\">",
    "</a></div>",
    "<div class=\"footer__meta\"><h2>Penn State<br>University Libraries</h2><ul>",
    "<li><a href=\"https://libraries.psu.edu\">Libraries Home</a></li>",
    "<li><a href=\"https://libraries.psu.edu/accessibility-help\">Accessibility Help</a></li>",
    "<li><a href=\"https://libraries.psu.edu/website-feedback\">Website Feedback</a></li>",
    "<li><a href=\"https://libraries.psu.edu/policies\">Policies and Guidelines</a></li>",
    "<li><a href=\"https://libraries.psu.edu/directory\">Staff Directory</a></li>",
    "</ul><ul><li>(814) 865-6368</li></ul></div>",
    "<div class=\"footer__boiler\"><p>",
    "<a href=\"https://libraries.psu.edu/penn-state-libraries-copyright-statement\">Libraries' Copyright Statement</a><br>",
    "<a href=\"http://www.psu.edu/ur/legal.html\">Legal Statements</a><br>",
    "<a href=\"http://www.psu.edu/ur/hotline.html\">Penn State Hotlines</a>",
    "</p></div></section></footer>",
);

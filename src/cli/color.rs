use std::fmt;

use anstyle::{AnsiColor, Style};
use eventhub_mgmt::DispatchError;

pub(crate) const BOLD: Style = Style::new().bold();
pub(crate) const DIM: Style = Style::new().dimmed();
pub(crate) const RED: Style = AnsiColor::Red.on_default();
pub(crate) const GREEN: Style = AnsiColor::Green.on_default();
pub(crate) const BLUE: Style = AnsiColor::Blue.on_default();
pub(crate) const HEADER: Style = AnsiColor::White.on_default().bold();

/// The API version an operation group resolved to, as a table cell.
///
/// A version the group doesn't exist at is shown in red, with the version
/// the profile asked for.
pub(crate) struct ResolvedVersion<'a>(pub &'a Result<&'a str, DispatchError>);

impl fmt::Display for ResolvedVersion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Ok(version) => write!(f, "{GREEN}{version}{GREEN:#}"),
            Err(DispatchError::UnsupportedVersion { version, .. }) => {
                write!(f, "{RED}{version} (unavailable){RED:#}")
            }
            Err(e) => write!(f, "{DIM}{e}{DIM:#}"),
        }
    }
}

/// Long-help examples: comment lines are dimmed, commands are bold.
pub(crate) struct CliExamples(pub &'static str);

impl From<CliExamples> for clap::builder::StyledStr {
    fn from(ex: CliExamples) -> Self {
        const CLAP_HEADER: Style = Style::new().bold().underline();

        let body: String = ex
            .0
            .trim_matches('\n')
            .lines()
            .map(|line| {
                let trimmed = line.trim_start();
                if trimmed.starts_with('#') {
                    format!("{DIM}\n{line}{DIM:#}")
                } else if trimmed.is_empty() {
                    "\n".to_owned()
                } else {
                    format!("{BOLD}\n{line}{BOLD:#}")
                }
            })
            .collect();

        format!("{CLAP_HEADER}Examples{CLAP_HEADER:#}{body}").into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolved_version_cells() {
        let ok = Ok("2017-04-01");
        assert_eq!(
            ResolvedVersion(&ok).to_string(),
            format!("{GREEN}2017-04-01{GREEN:#}")
        );

        let unavailable = Err(DispatchError::UnsupportedVersion {
            version: "2017-04-01".to_owned(),
            group: Some("clusters".to_owned()),
        });
        assert_eq!(
            ResolvedVersion(&unavailable).to_string(),
            format!("{RED}2017-04-01 (unavailable){RED:#}")
        );
    }

    #[test]
    fn examples_styles_comments_and_commands() {
        let styled = clap::builder::StyledStr::from(CliExamples(
            "\n  # List namespaces\n  ehmgmt namespace ls\n",
        ));
        let text = styled.ansi().to_string();

        assert!(text.contains(&format!("{DIM}\n  # List namespaces{DIM:#}")));
        assert!(text.contains(&format!("{BOLD}\n  ehmgmt namespace ls{BOLD:#}")));
    }
}

//! Tool Dispatcher — the closed allow-list of lookup functions the model may
//! request. Names resolve to a `Tool` variant at parse time; anything outside
//! the allow-list is an explicit [`ToolError::Unknown`], never a silent call.
//!
//! `SAVE_CONTACT` is deliberately absent here: the orchestrator handles it
//! directly and it must never reach the dispatcher.

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};

use crate::profile::Profile;

/// The fixed set of lookup functions exposed to the language model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    GetIntroduction,
    GetEducations,
    GetSkills,
    GetAllProjects,
    GetSpecificProject,
    GetProjectsBySkill,
    GetExperiences,
    GetExtracurricularActivities,
    GetSocialLinks,
}

/// Wire names, as advertised in the system prompt.
pub const TOOL_NAMES: [&str; 9] = [
    "getintroduction",
    "geteducations",
    "getskills",
    "getallprojects",
    "getspecificproject",
    "getprojectsbyskill",
    "getexperiences",
    "getextracurricularactivities",
    "getsociallinks",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    Unknown(String),
}

impl FromStr for Tool {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "getintroduction" => Ok(Tool::GetIntroduction),
            "geteducations" => Ok(Tool::GetEducations),
            "getskills" => Ok(Tool::GetSkills),
            "getallprojects" => Ok(Tool::GetAllProjects),
            "getspecificproject" => Ok(Tool::GetSpecificProject),
            "getprojectsbyskill" => Ok(Tool::GetProjectsBySkill),
            "getexperiences" => Ok(Tool::GetExperiences),
            "getextracurricularactivities" => Ok(Tool::GetExtracurricularActivities),
            "getsociallinks" => Ok(Tool::GetSocialLinks),
            other => Err(ToolError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tool::GetIntroduction => "getintroduction",
            Tool::GetEducations => "geteducations",
            Tool::GetSkills => "getskills",
            Tool::GetAllProjects => "getallprojects",
            Tool::GetSpecificProject => "getspecificproject",
            Tool::GetProjectsBySkill => "getprojectsbyskill",
            Tool::GetExperiences => "getexperiences",
            Tool::GetExtracurricularActivities => "getextracurricularactivities",
            Tool::GetSocialLinks => "getsociallinks",
        };
        f.write_str(name)
    }
}

/// Outcome of a dispatch. `Data` feeds the follow-up prompt as JSON;
/// `Message` is a value-level miss (not-found or prompt-for-argument) that
/// the orchestrator turns into the fixed fallback reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    Data(Value),
    Message(String),
}

impl Tool {
    /// Executes the tool against the profile with positional string arguments.
    pub fn execute(&self, args: &[String], profile: &Profile) -> ToolOutput {
        match self {
            Tool::GetIntroduction => ToolOutput::Data(json!(profile.introduction())),
            Tool::GetEducations => ToolOutput::Data(json!(profile.educations())),
            Tool::GetSkills => ToolOutput::Data(json!(profile.skills())),
            Tool::GetAllProjects => ToolOutput::Data(json!(profile.all_projects())),
            Tool::GetSpecificProject => {
                let title = match args.first().map(|s| s.trim()).filter(|s| !s.is_empty()) {
                    Some(t) => t,
                    None => return ToolOutput::Message("Please provide a project title".into()),
                };
                match profile.find_project(title) {
                    Some(project) => ToolOutput::Data(json!(project)),
                    None => ToolOutput::Message(format!(
                        "Project \"{title}\" not found. Please check the project name and try again."
                    )),
                }
            }
            Tool::GetProjectsBySkill => {
                let skill = match args.first().map(|s| s.trim()).filter(|s| !s.is_empty()) {
                    Some(s) => s,
                    None => return ToolOutput::Message("Please provide a skill name".into()),
                };
                let matches = profile.find_projects_by_skill(skill);
                if matches.is_empty() {
                    ToolOutput::Message(format!(
                        "No projects found using \"{skill}\". Please check the skill name and try again."
                    ))
                } else {
                    ToolOutput::Data(json!(matches))
                }
            }
            Tool::GetExperiences => ToolOutput::Data(json!(profile.experiences())),
            Tool::GetExtracurricularActivities => ToolOutput::Data(json!(profile.activities())),
            Tool::GetSocialLinks => ToolOutput::Data(json!(profile.social_links())),
        }
    }
}

/// Parses the bracketed argument list of a tool call. The content is tried
/// as a JSON array first; if that fails it becomes a single raw string
/// argument with quotes stripped.
pub fn parse_args(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<Value>>(&format!("[{raw}]")) {
        Ok(values) => values
            .into_iter()
            .map(|v| match v {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Err(_) => vec![raw.replace(['"', '\''], "").trim().to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::data::default_profile;

    #[test]
    fn test_every_advertised_name_resolves() {
        for name in TOOL_NAMES {
            let tool = Tool::from_str(name).unwrap();
            assert_eq!(tool.to_string(), name);
        }
    }

    #[test]
    fn test_unknown_name_is_explicit_error() {
        let err = Tool::from_str("dropalltables").unwrap_err();
        assert_eq!(err, ToolError::Unknown("dropalltables".to_string()));
    }

    #[test]
    fn test_save_contact_is_not_dispatchable() {
        assert!(Tool::from_str("SAVE_CONTACT").is_err());
    }

    #[test]
    fn test_parse_args_json_list() {
        assert_eq!(parse_args(r#""Portfolio Website""#), vec!["Portfolio Website"]);
        assert_eq!(parse_args(r#""a", "b""#), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_args_falls_back_to_raw_string() {
        assert_eq!(parse_args("Portfolio Website"), vec!["Portfolio Website"]);
        assert_eq!(parse_args("'quoted'"), vec!["quoted"]);
    }

    #[test]
    fn test_parse_args_empty() {
        assert!(parse_args("").is_empty());
        assert!(parse_args("   ").is_empty());
    }

    #[test]
    fn test_specific_project_not_found_message_names_title() {
        let profile = default_profile();
        let out = Tool::GetSpecificProject.execute(&["Time Machine".to_string()], &profile);
        match out {
            ToolOutput::Message(msg) => assert!(msg.contains("Time Machine")),
            other => panic!("expected not-found message, got {other:?}"),
        }
    }

    #[test]
    fn test_specific_project_missing_title_prompts() {
        let profile = default_profile();
        let out = Tool::GetSpecificProject.execute(&[], &profile);
        assert_eq!(
            out,
            ToolOutput::Message("Please provide a project title".to_string())
        );
    }

    #[test]
    fn test_specific_project_case_insensitive_lookup() {
        let profile = default_profile();
        let out = Tool::GetSpecificProject.execute(&["portfolio website".to_string()], &profile);
        match out {
            ToolOutput::Data(v) => assert_eq!(v["title"], "Portfolio Website"),
            other => panic!("expected project data, got {other:?}"),
        }
    }

    #[test]
    fn test_projects_by_skill_not_found_message_names_skill() {
        let profile = default_profile();
        let out = Tool::GetProjectsBySkill.execute(&["fortran".to_string()], &profile);
        match out {
            ToolOutput::Message(msg) => assert!(msg.contains("fortran")),
            other => panic!("expected not-found message, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_arg_tools_return_data() {
        let profile = default_profile();
        for tool in [
            Tool::GetIntroduction,
            Tool::GetEducations,
            Tool::GetSkills,
            Tool::GetAllProjects,
            Tool::GetExperiences,
            Tool::GetExtracurricularActivities,
            Tool::GetSocialLinks,
        ] {
            assert!(matches!(tool.execute(&[], &profile), ToolOutput::Data(_)));
        }
    }
}

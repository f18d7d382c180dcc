//! Response schema handed to Gemini's structured output mode.
//!
//! Uses Gemini's OpenAPI subset (`OBJECT`, `ARRAY`, `STRING`, `INTEGER`).
//! Field names and `required` lists must stay in lockstep with
//! `models::roadmap::RoadmapResponse`.

use serde_json::{json, Value};

fn string(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

fn integer(description: &str) -> Value {
    json!({ "type": "INTEGER", "description": description })
}

fn string_list(description: &str) -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" }, "description": description })
}

fn mini_project_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "project_name": string("The name of the project."),
            "project_description": string("A brief description of the project."),
            "time_estimate_weeks": integer("Estimated time in weeks to complete the project."),
            "metrics_or_deliverables": string("What the final outcome or success metric is."),
        },
        "required": ["project_name", "project_description", "time_estimate_weeks", "metrics_or_deliverables"],
    })
}

fn recommended_role_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "role_name": string("The name of the career role."),
            "why_fit": string("Explanation of why this role is a good fit for the user."),
            "core_skills": string_list("Essential skills for this role."),
            "differentiator_skills": string_list("Skills that make a candidate stand out."),
            "mini_projects": {
                "type": "ARRAY",
                "description": "A list of mini-project ideas to build skills for this role.",
                "items": mini_project_schema(),
            },
            "timeline_months": integer("Estimated timeline in months to become job-ready for this role."),
        },
        "required": ["role_name", "why_fit", "core_skills", "differentiator_skills", "mini_projects", "timeline_months"],
    })
}

fn personalised_path_schema() -> Value {
    json!({
        "type": "OBJECT",
        "description": "A detailed, personalized learning path for the user.",
        "properties": {
            "entry_role": string("The recommended entry-level role for the user's path."),
            "months_to_target": integer("Total months for the learning plan."),
            "weekly_plan": {
                "type": "ARRAY",
                "description": "A week-by-week breakdown of the learning plan.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "week_number": integer("The week number in the plan."),
                        "focus": string("The main topic or skill to focus on for the week."),
                        "deliverable": string("A tangible outcome for the week's work."),
                    },
                    "required": ["week_number", "focus", "deliverable"],
                },
            },
        },
        "required": ["entry_role", "months_to_target", "weekly_plan"],
    })
}

/// Full schema for a `RoadmapResponse`.
pub fn roadmap_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recommended_roles": {
                "type": "ARRAY",
                "description": "A list of career roles recommended for the user.",
                "items": recommended_role_schema(),
            },
            "user_personalised_path": personalised_path_schema(),
        },
        "required": ["recommended_roles", "user_personalised_path"],
    })
}

//! Static instruction script printed after a fully successful check.

/// Summary line preceding the manual steps.
pub const SUMMARY_LINE: &str = "All files exist. You need to add them manually in Xcode:";

/// Folder group holding the Currency and Shop sources.
const CORE_GROUP: &str = "ModernTetris/Core";
/// Folder group holding the shop view sources.
const FEATURES_GROUP: &str = "ModernTetris/Features";

/// Render the manual-registration steps for the named project.
///
/// The step and reminder text is fixed; only the project name is spliced
/// into the `.xcodeproj` reference, the "Add Files to ..." action, and the
/// build-target reminder.
pub fn render(project_name: &str) -> Vec<String> {
    vec![
        String::new(),
        SUMMARY_LINE.to_string(),
        String::new(),
        format!("1. Open {project_name}.xcodeproj in Xcode"),
        format!("2. Right-click on '{CORE_GROUP}' folder"),
        format!("3. Select 'Add Files to {project_name}...'"),
        String::from("4. Navigate to and select:"),
        format!("   - {CORE_GROUP}/Currency folder"),
        format!("   - {CORE_GROUP}/Shop folder"),
        format!("5. Right-click on '{FEATURES_GROUP}' folder"),
        format!("6. Select 'Add Files to {project_name}...'"),
        String::from("7. Navigate to and select:"),
        format!("   - {FEATURES_GROUP}/Shop folder"),
        String::new(),
        String::from("Make sure to:"),
        String::from("- UNCHECK 'Copy items if needed'"),
        String::from("- SELECT 'Create groups'"),
        format!("- SELECT '{project_name}' target"),
    ]
}

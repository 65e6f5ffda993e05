// Console greeting printed once at startup.

const ART: [&str; 6] = [
    "██╗  ██╗███████╗██╗     ██╗         ██╗███╗   ██╗ ██████╗",
    "██║  ██║██╔════╝██║     ██║         ██║████╗  ██║██╔════╝",
    "███████║█████╗  ██║     ██║         ██║██╔██╗ ██║██║     ",
    "██╔══██║██╔══╝  ██║     ██║         ██║██║╚██╗██║██║     ",
    "██║  ██║███████╗███████╗███████╗    ██║██║ ╚████║╚██████╗",
    "╚═╝  ╚═╝╚══════╝╚══════╝╚══════╝    ╚═╝╚═╝  ╚═══╝ ╚═════╝",
];

const WELCOME: &str = "Welcome to Hell Inc. Your soul has been logged.\n\
Employee Handbook Section 2.1: Debugging in Hell voids your warranty.";

const ART_COLORS: [&str; 6] = [
    "#ff2a2a", "#ff4444", "#ff6b35", "#f7931e", "#ff6b35", "#ff4444",
];

const WELCOME_STYLE: &str = "color: #00ffff; font-style: italic;";

/// Format string and the `%c` style arguments for `console.log`.
///
/// Each art line and the welcome text gets its own `%c` segment, so the
/// returned style list always matches the segment count.
pub fn console_banner() -> (String, Vec<String>) {
    let mut text = String::from("\n");
    for line in ART {
        text.push_str("%c");
        text.push_str(line);
        text.push('\n');
    }
    text.push_str("\n%c");
    text.push_str(WELCOME);
    text.push('\n');

    let mut styles: Vec<String> = ART_COLORS.iter().map(|c| format!("color: {c}")).collect();
    styles.push(WELCOME_STYLE.to_string());
    (text, styles)
}

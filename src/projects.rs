/// A featured project shown by `projects` and reachable through `open <key>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tech: &'static str,
    pub url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        key: "discord-bot",
        name: "discord-bot",
        description: "Moderation + music + AI Gemini",
        tech: "Python, discord.py",
        url: "https://github.com/Swag-iwnl-m1/Dampang-Bot",
    },
    Project {
        key: "roblox-game",
        name: "Roblox game",
        description: "Make horror game about my campus",
        tech: "Lua, Roblox studio",
        url: "https://www.roblox.com/share?code=b07d1de09e05904082cd79912dc4a567&type=ExperienceDetails&stamp=1756125186597",
    },
];

/// Find a project by key, ignoring case.
pub fn find(key: &str) -> Option<&'static Project> {
    let key = key.to_lowercase();
    PROJECTS.iter().find(|p| p.key.to_lowercase() == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert!(!a.key.eq_ignore_ascii_case(b.key));
            }
        }
    }

    #[test]
    fn find_ignores_case() {
        let p = find("Discord-BOT").unwrap();
        assert_eq!(p.url, "https://github.com/Swag-iwnl-m1/Dampang-Bot");
        assert!(find("roblox game").is_none());
        assert!(find("roblox-game").is_some());
    }
}

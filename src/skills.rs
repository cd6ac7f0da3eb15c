#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend",
        items: &[
            Skill {
                name: "React",
                level: 90,
            },
            Skill {
                name: "TypeScript",
                level: 80,
            },
            Skill {
                name: "Tailwind",
                level: 85,
            },
        ],
    },
    SkillGroup {
        title: "Backend",
        items: &[
            Skill {
                name: "Node.js",
                level: 75,
            },
            Skill {
                name: "FastAPI",
                level: 70,
            },
            Skill {
                name: "MongoDB",
                level: 72,
            },
        ],
    },
    SkillGroup {
        title: "Tools",
        items: &[
            Skill {
                name: "Git",
                level: 85,
            },
            Skill {
                name: "Figma",
                level: 70,
            },
            Skill {
                name: "Docker",
                level: 60,
            },
        ],
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        label: "Human-centered",
        icon: "👤",
    },
    Highlight {
        label: "Clean code",
        icon: "</>",
    },
    Highlight {
        label: "Performance",
        icon: "⚙",
    },
    Highlight {
        label: "Ship fast",
        icon: "🚀",
    },
];

const GROUP_DELAY_MS: u32 = 100;
const HIGHLIGHT_DELAY_MS: u32 = 80;

impl Skill {
    /// CSS width of the filled bar, capped at full.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.level.min(100))
    }
}

/// Reveal delay of the skill group card at `index`.
pub fn group_delay_ms(index: usize) -> u32 {
    GROUP_DELAY_MS * index as u32
}

/// Reveal delay of the about highlight tile at `index`.
pub fn highlight_delay_ms(index: usize) -> u32 {
    HIGHLIGHT_DELAY_MS * index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_caps_at_full() {
        let skill = Skill {
            name: "Rust",
            level: 130,
        };
        assert_eq!(skill.bar_width(), "100%");
        assert_eq!(SKILL_GROUPS[0].items[0].bar_width(), "90%");
    }

    #[test]
    fn test_groups() {
        let titles = SKILL_GROUPS.iter().map(|g| g.title).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Frontend", "Backend", "Tools"]);
        assert!(SKILL_GROUPS
            .iter()
            .flat_map(|g| g.items)
            .all(|s| s.level <= 100));
    }

    #[test]
    fn test_stagger() {
        assert_eq!(group_delay_ms(0), 0);
        assert_eq!(group_delay_ms(2), 200);
        assert_eq!(highlight_delay_ms(3), 240);
        assert_eq!(HIGHLIGHTS.len(), 4);
    }
}

/// Built-in palettes served by the mock source.

pub(super) struct Template {
    pub title: &'static str,
    pub user_name: &'static str,
    pub colors: [&'static str; 5],
}

pub(super) struct Ranked {
    pub id: u64,
    pub num_votes: u32,
    pub template: Template,
}

pub(super) const RANDOM_TEMPLATES: &[Template] = &[
    Template {
        title: "Ocean Breeze",
        user_name: "ColorMaster",
        colors: ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7"],
    },
    Template {
        title: "Pastel Dreams",
        user_name: "SoftTones",
        colors: ["#A8E6CF", "#DCEDC1", "#FFD3A5", "#FFA8A8", "#FF8A80"],
    },
    Template {
        title: "Modern Gray",
        user_name: "MinimalDesign",
        colors: ["#667292", "#A4B0BE", "#F1F2F6", "#57606F", "#2F3542"],
    },
    Template {
        title: "Neon Nights",
        user_name: "VibrantArt",
        colors: ["#FF9FF3", "#F368E0", "#3742FA", "#2F3542", "#FF3838"],
    },
    Template {
        title: "Fresh Mint",
        user_name: "NatureVibes",
        colors: ["#26DE81", "#20BF6B", "#0FB9B1", "#45AAF2", "#2D98DA"],
    },
    Template {
        title: "Sunset Glow",
        user_name: "WarmColors",
        colors: ["#FD79A8", "#FDCB6E", "#6C5CE7", "#A29BFE", "#74B9FF"],
    },
    Template {
        title: "Tropical Waters",
        user_name: "BeachLife",
        colors: ["#00B894", "#00CEC9", "#81ECEC", "#74B9FF", "#0984E3"],
    },
    Template {
        title: "Vibrant Mix",
        user_name: "BoldChoice",
        colors: ["#E17055", "#FDCB6E", "#E84393", "#6C5CE7", "#74B9FF"],
    },
];

pub(super) const TOP_PALETTES: &[Ranked] = &[
    Ranked {
        id: 1,
        num_votes: 1250,
        template: Template {
            title: "Ocean Breeze",
            user_name: "Designer1",
            colors: ["#0077BE", "#00A8CC", "#7FB069", "#FFD23F", "#FF6B35"],
        },
    },
    Ranked {
        id: 2,
        num_votes: 980,
        template: Template {
            title: "Sunset Vibes",
            user_name: "Designer2",
            colors: ["#FF6B6B", "#FF8E53", "#FF6B9D", "#C44569", "#F8B500"],
        },
    },
    Ranked {
        id: 3,
        num_votes: 875,
        template: Template {
            title: "Forest Path",
            user_name: "Designer3",
            colors: ["#2D5016", "#61892F", "#86C232", "#C6E174", "#F0F3BD"],
        },
    },
    Ranked {
        id: 4,
        num_votes: 720,
        template: Template {
            title: "Purple Dreams",
            user_name: "Designer4",
            colors: ["#6C5CE7", "#A29BFE", "#FD79A8", "#FDCB6E", "#E17055"],
        },
    },
    Ranked {
        id: 5,
        num_votes: 650,
        template: Template {
            title: "Minimal Gray",
            user_name: "Designer5",
            colors: ["#2D3436", "#636E72", "#B2BEC3", "#DDDDDD", "#FFFFFF"],
        },
    },
];

/// Per-genre analysis skeleton.
#[derive(Debug, PartialEq, Eq)]
pub struct AnalysisTemplate {
    pub keywords: [&'static str; 6],
    pub analysis_focus: &'static str,
    pub sample_content: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Fiction,
    Technology,
    Science,
    History,
    Philosophy,
    NonFiction,
}

static FICTION: AnalysisTemplate = AnalysisTemplate {
    keywords: ["character", "conflict", "theme", "style", "narrative", "emotion"],
    analysis_focus: "literary expression and character psychology",
    sample_content: "a novel that delicately portrays complex human emotions and relationships.",
};

static TECHNOLOGY: AnalysisTemplate = AnalysisTemplate {
    keywords: ["technology", "implementation", "methodology", "practice", "development", "system"],
    analysis_focus: "technical content and practical applicability",
    sample_content: "a technical book presenting current development trends and concrete methods ready to apply in practice.",
};

static SCIENCE: AnalysisTemplate = AnalysisTemplate {
    keywords: ["science", "research", "theory", "experiment", "discovery", "principle"],
    analysis_focus: "scientific principles and research methodology",
    sample_content: "a systematic explanation grounded in scientific fact that makes complex concepts easy to grasp.",
};

static HISTORY: AnalysisTemplate = AnalysisTemplate {
    keywords: ["history", "era", "figure", "event", "background", "influence"],
    analysis_focus: "historical context and the meaning of the era",
    sample_content: "a meaningful work that offers insight into the present through historical fact.",
};

static PHILOSOPHY: AnalysisTemplate = AnalysisTemplate {
    keywords: ["philosophy", "thought", "existence", "cognition", "ethics", "value"],
    analysis_focus: "philosophical reasoning and ontological meaning",
    sample_content: "an in-depth philosophical inquiry into the fundamental questions of human existence.",
};

static NON_FICTION: AnalysisTemplate = AnalysisTemplate {
    keywords: ["fact", "information", "analysis", "explanation", "evidence", "conclusion"],
    analysis_focus: "factual information and logical structure",
    sample_content: "reliable information built on objective facts and data.",
};

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Fiction,
        Genre::Technology,
        Genre::Science,
        Genre::History,
        Genre::Philosophy,
        Genre::NonFiction,
    ];

    /// Case-insensitive lookup; anything unrecognised is treated as non-fiction.
    pub fn from_tag(tag: &str) -> Genre {
        match tag.trim().to_uppercase().as_str() {
            "FICTION" => Genre::Fiction,
            "TECHNOLOGY" => Genre::Technology,
            "SCIENCE" => Genre::Science,
            "HISTORY" => Genre::History,
            "PHILOSOPHY" => Genre::Philosophy,
            _ => Genre::NonFiction,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Genre::Fiction => "FICTION",
            Genre::Technology => "TECHNOLOGY",
            Genre::Science => "SCIENCE",
            Genre::History => "HISTORY",
            Genre::Philosophy => "PHILOSOPHY",
            Genre::NonFiction => "NON_FICTION",
        }
    }

    pub fn template(self) -> &'static AnalysisTemplate {
        match self {
            Genre::Fiction => &FICTION,
            Genre::Technology => &TECHNOLOGY,
            Genre::Science => &SCIENCE,
            Genre::History => &HISTORY,
            Genre::Philosophy => &PHILOSOPHY,
            Genre::NonFiction => &NON_FICTION,
        }
    }
}

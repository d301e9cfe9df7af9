use crate::models::requests::Genre;
use crate::models::responses::AnalysisType;

pub const SYSTEM_PROMPT: &str = "You are a book analysis expert. \
Based on the reader's reading record, you provide insightful analysis.";

/// A rendered prompt ready for the completion API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
    pub analysis_type: AnalysisType,
}

const LITERATURE_SECTIONS: &str = "\
## 📖 Reading Journey
- The reader's perspective and how their feelings shift across the reading record
- The concrete impact and realisations the work left with the reader
- Passages that connect to the reader's own experience

## 🎭 Core Analysis of the Work
- A contemporary reading of the main themes and messages
- The characters' psychological motives and the structure of their conflicts
- What the symbols and metaphors mean and how they work
- Narrative structure and notable literary techniques

## 🌍 Cultural Context
- The historical background of the work and its social meaning
- Its value as a universal human experience
- Where present-day readers can find common ground

## 💡 Insight and Reflection
- Life lessons this work offers
- How it widens the reader's view of the world
- Lessons that carry over into everyday life

## 📚 Related Reading Guide
- Three recommended works on similar themes, with reasons
- Other books by the author worth reading
- Works in related genres or from the same literary lineage

Keep every section concrete and practical, spark the reader's intellectual curiosity, \
and encourage deeper reading.";

const TECHNICAL_SECTIONS: &str = "\
## 🔑 Core Concept Mastery
- How accurately the reading record grasps the key technical concepts it mentions
- The concrete problems each concept solves in practice
- Strengths and weaknesses compared with established approaches
- Important details learners tend to miss

## 💻 Applying It in Practice
- Concrete ways to apply it to a current project right away
- Expected difficulties when adopting it and how to address them
- Team-level adoption concerns and a step-by-step approach
- How to measure results and which indicators to improve

## 🛠️ Hands-on Code Guide
- Implementation examples grounded in the book's theory
- Common mistakes and debugging tips
- Performance optimisation points
- Design principles for scalability and maintainability

## 🚀 Career Growth Roadmap
- Where expertise in this area can grow
- Synergy with related technology stacks
- Industry trends and outlook
- Portfolio project ideas

## 📖 Curated Learning Resources
- Three recommended books for deeper study, by difficulty
- Hands-on online courses and documentation
- References the community and practitioners rely on
- Sources for current updates and best practices

Make every section immediately usable at work and aimed directly at the developer's \
technical growth and problem-solving ability.";

pub fn build_prompt(genre: Genre, title: &str, author: &str, reading_content: &str) -> Prompt {
    let (intro, request, sections, analysis_type) = match genre {
        Genre::Literature => (
            "Here is the user's reading record:",
            "Write an in-depth analysis of this literary work using the following structure:",
            LITERATURE_SECTIONS,
            AnalysisType::LiteratureAnalysis,
        ),
        Genre::Technical => (
            "Here is the user's reading record for a technical book:",
            "Write a practice-oriented, comprehensive analysis of this technical book using the following structure:",
            TECHNICAL_SECTIONS,
            AnalysisType::TechnicalSummary,
        ),
    };

    let user = format!(
        "{intro}\n\nTitle: {title}\nAuthor: {author}\nReading record: {reading_content}\n\n{request}\n\n{sections}"
    );

    Prompt {
        system: SYSTEM_PROMPT,
        user,
        analysis_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literature_prompt_interpolates_request_fields() {
        let prompt = build_prompt(
            Genre::Literature,
            "Pachinko",
            "Min Jin Lee",
            "Sunja's choices stayed with me.",
        );

        assert_eq!(prompt.analysis_type, AnalysisType::LiteratureAnalysis);
        assert_eq!(prompt.system, SYSTEM_PROMPT);
        assert!(prompt.user.contains("Title: Pachinko"));
        assert!(prompt.user.contains("Author: Min Jin Lee"));
        assert!(prompt.user.contains("Reading record: Sunja's choices stayed with me."));
        assert!(prompt.user.contains("## 🎭 Core Analysis of the Work"));
        assert!(!prompt.user.contains("Hands-on Code Guide"));
    }

    #[test]
    fn technical_prompt_uses_practitioner_sections() {
        let prompt = build_prompt(
            Genre::Technical,
            "Designing Data-Intensive Applications",
            "Martin Kleppmann",
            "Replication lag explained a bug we had.",
        );

        assert_eq!(prompt.analysis_type, AnalysisType::TechnicalSummary);
        assert!(prompt.user.starts_with("Here is the user's reading record for a technical book:"));
        assert_eq!(prompt.user.matches("\n## ").count(), 5);
        assert!(prompt.user.contains("## 🛠️ Hands-on Code Guide"));
    }

    #[test]
    fn same_input_yields_same_prompt() {
        let a = build_prompt(Genre::Literature, "T", "A", "C");
        let b = build_prompt(Genre::Literature, "T", "A", "C");
        assert_eq!(a, b);
    }
}

pub mod fixtures {
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;

    use crate::models::domain::{Choice, Question};
    use crate::providers::{QuestionsProvider, SampleQuestionsProvider};

    /// The five sample arithmetic questions, unanswered
    pub fn arithmetic_questions() -> Vec<Arc<Question>> {
        SampleQuestionsProvider::default().questions()
    }

    /// Multi-choice question whose correct selection is {E, F, G}
    pub fn letters_question() -> Question {
        let choices: HashMap<Choice, String> = [Choice::E, Choice::F, Choice::G, Choice::L]
            .into_iter()
            .map(|choice| (choice, format!("Letter {}", choice)))
            .collect();
        Question::multi_choice(
            "Which letters come right after D?",
            choices,
            HashSet::from([Choice::E, Choice::F, Choice::G]),
        )
        .expect("letters question is well formed")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::{MultiChoiceAnswer, QuestionKind};

    #[test]
    fn test_fixtures_arithmetic_questions() {
        let questions = arithmetic_questions();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| !q.is_answered()));
    }

    #[test]
    fn test_fixtures_letters_question() {
        let question = letters_question();
        assert_eq!(question.kind(), QuestionKind::MultiChoice);
        assert_eq!(question.help().to_string(), "E; F; G");

        let selection: MultiChoiceAnswer = "g f e".parse().unwrap();
        question.answer(std::sync::Arc::new(selection)).unwrap();
        assert!(question.is_correct());
    }
}

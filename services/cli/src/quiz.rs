use career_fit::assessment::AssessmentSession;
use career_fit::error::AppError;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuizOutcome {
    Completed,
    Quit,
}

enum Command {
    Quit,
    Back,
    Continue,
    Select(usize),
    Invalid,
}

fn parse_command(line: &str, option_count: usize) -> Command {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" => Command::Quit,
        "b" | "back" => Command::Back,
        "" => Command::Continue,
        other => match other.parse::<usize>() {
            Ok(choice) if (1..=option_count).contains(&choice) => Command::Select(choice - 1),
            _ => Command::Invalid,
        },
    }
}

/// Drives the session from line-oriented input until it completes or the user quits.
pub(crate) fn run_quiz<R: BufRead, W: Write>(
    session: &mut AssessmentSession,
    mut input: R,
    out: &mut W,
) -> Result<QuizOutcome, AppError> {
    let mut line = String::new();

    loop {
        let option_count = {
            let (Some(section), Some(question)) =
                (session.current_section(), session.current_question())
            else {
                return Ok(if session.is_complete() {
                    QuizOutcome::Completed
                } else {
                    QuizOutcome::Quit
                });
            };

            let progress = session.progress();
            let current = session.current_answer();
            writeln!(out, "\n== {} ==", section.title)?;
            writeln!(
                out,
                "Question {} of {} ({:.0}%)",
                progress.position, progress.total, progress.percent
            )?;
            writeln!(out, "{}", question.text)?;
            for (index, label) in question.option_labels().iter().enumerate() {
                let marker = if current == Some(index) { '*' } else { ' ' };
                writeln!(out, " {}{}) {}", marker, index + 1, label)?;
            }
            write!(out, "Choose 1-{}", question.option_count())?;
            if current.is_some() {
                write!(out, ", Enter to keep")?;
            }
            if !session.is_first_question() {
                write!(out, ", b for back")?;
            }
            write!(out, ", q to quit: ")?;
            out.flush()?;
            question.option_count()
        };

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(QuizOutcome::Quit);
        }

        match parse_command(&line, option_count) {
            Command::Quit => return Ok(QuizOutcome::Quit),
            Command::Back => session.previous()?,
            Command::Continue => {
                if session.can_proceed() {
                    session.next()?;
                } else {
                    writeln!(out, "Please select an answer before continuing.")?;
                }
            }
            Command::Select(answer) => {
                session.select_answer(answer)?;
                session.next()?;
            }
            Command::Invalid => {
                writeln!(out, "Enter a number between 1 and {option_count}.")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_fit::assessment::Recommendation;
    use std::io::Cursor;

    fn drive(script: &str) -> (AssessmentSession, QuizOutcome, String) {
        let mut session = AssessmentSession::standard();
        let mut out = Vec::new();
        let outcome =
            run_quiz(&mut session, Cursor::new(script.to_string()), &mut out).expect("quiz runs");
        (session, outcome, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn answering_every_question_completes_the_session() {
        let script = "5\n5\n5\n5\n5\n5\n1\n2\n1\n1\n1\n1\n1\n1\n1\n1\n1\n";
        let (session, outcome, transcript) = drive(script);

        assert_eq!(outcome, QuizOutcome::Completed);
        let results = session.results().expect("scored");
        assert_eq!(results.recommendation, Recommendation::StrongFit);
        assert!(transcript.contains("Question 1 of 17"));
        assert!(transcript.contains("== WISCAR Framework Analysis =="));
    }

    #[test]
    fn quitting_leaves_session_unscored() {
        let (session, outcome, _) = drive("3\nq\n");
        assert_eq!(outcome, QuizOutcome::Quit);
        assert!(!session.is_complete());
        assert_eq!(session.answer_for("psyc_1"), Some(2));
    }

    #[test]
    fn end_of_input_is_treated_as_quit() {
        let (session, outcome, _) = drive("");
        assert_eq!(outcome, QuizOutcome::Quit);
        assert!(session.responses().is_empty());
    }

    #[test]
    fn blank_line_without_answer_is_refused() {
        let (session, _, transcript) = drive("\nq\n");
        assert!(transcript.contains("Please select an answer before continuing."));
        assert_eq!(session.position(), (0, 0));
    }

    #[test]
    fn out_of_range_choice_is_reported() {
        let (session, _, transcript) = drive("9\nabc\nq\n");
        assert_eq!(transcript.matches("Enter a number between 1 and 5.").count(), 2);
        assert!(session.responses().is_empty());
    }

    #[test]
    fn going_back_shows_and_keeps_previous_answer() {
        let (session, _, transcript) = drive("2\nb\n\nq\n");
        assert!(transcript.contains(" *2) Disagree"));
        assert_eq!(session.answer_for("psyc_1"), Some(1));
        assert_eq!(session.position(), (0, 1));
    }
}

use std::collections::HashMap;
use std::rc::Rc;

use yew::Reducible;

use crate::calculator::scoring::{self, EligibilityResult};

pub const TOTAL_STEPS: u8 = 6;

pub const SELECT_PROMPT: &str = "Please choose an option from the list";

/// Transient notice shown when the user tries to advance without a
/// selection. `seq` distinguishes repeated notices so the dismissal
/// timer restarts each time one is raised.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationNotice {
    pub seq: u32,
    pub message: &'static str,
}

/// One user's run through the calculator. Created when the form mounts,
/// replaced only by a page reload. Steps 1 through 5 each collect one
/// categorical answer; step 6 is the review step that exposes submit.
#[derive(Clone, Debug, PartialEq)]
pub struct FormSession {
    pub step: u8,
    pub answers: HashMap<String, String>,
    pub validation: Option<ValidationNotice>,
    pub result: Option<EligibilityResult>,
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            step: 1,
            answers: HashMap::new(),
            validation: None,
            result: None,
        }
    }

    pub fn answer(&self, field: &str) -> Option<&str> {
        self.answers.get(field).map(String::as_str)
    }

    pub fn is_submitted(&self) -> bool {
        self.result.is_some()
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub enum FormAction {
    /// Try to move past the current step with the value read from its
    /// selector. An empty value raises a validation notice instead.
    Advance { field: &'static str, value: String },
    Retreat,
    Submit,
    DismissValidation,
}

impl Reducible for FormSession {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        // Submission is terminal. A reload is the only reset path.
        if self.result.is_some() {
            return self;
        }
        match action {
            FormAction::Advance { field, value } => {
                if self.step >= TOTAL_STEPS {
                    return self;
                }
                let mut next = (*self).clone();
                if value.is_empty() {
                    let seq = next.validation.as_ref().map_or(0, |n| n.seq) + 1;
                    next.validation = Some(ValidationNotice {
                        seq,
                        message: SELECT_PROMPT,
                    });
                } else {
                    next.answers.insert(field.to_string(), value);
                    next.step += 1;
                    next.validation = None;
                }
                Rc::new(next)
            }
            FormAction::Retreat => {
                if self.step <= 1 {
                    return self;
                }
                let mut next = (*self).clone();
                next.step -= 1;
                next.validation = None;
                Rc::new(next)
            }
            FormAction::Submit => {
                if self.step != TOTAL_STEPS {
                    return self;
                }
                let mut next = (*self).clone();
                next.validation = None;
                next.result = Some(scoring::evaluate(&next.answers));
                Rc::new(next)
            }
            FormAction::DismissValidation => {
                if self.validation.is_none() {
                    return self;
                }
                let mut next = (*self).clone();
                next.validation = None;
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::scoring::Tier;

    const FIELDS: [(&str, &str); 5] = [
        ("businessType", "technology"),
        ("annualRevenue", "more-3750000"),
        ("profitMargin", "more-50"),
        ("companyAge", "more-20"),
        ("employees", "more-100"),
    ];

    fn session() -> Rc<FormSession> {
        Rc::new(FormSession::new())
    }

    fn advance(session: Rc<FormSession>, field: &'static str, value: &str) -> Rc<FormSession> {
        session.reduce(FormAction::Advance {
            field,
            value: value.to_string(),
        })
    }

    #[test]
    fn valid_advance_increments_and_records() {
        let mut s = session();
        for (index, (field, value)) in FIELDS.iter().enumerate() {
            assert_eq!(s.step, index as u8 + 1);
            s = advance(s, field, value);
            assert_eq!(s.step, index as u8 + 2);
            assert_eq!(s.answer(field), Some(*value));
        }
        assert_eq!(s.step, TOTAL_STEPS);
    }

    #[test]
    fn advance_without_selection_keeps_the_step() {
        let s = session();
        let s = advance(s, "businessType", "");
        assert_eq!(s.step, 1);
        assert!(s.answers.is_empty());
        let notice = s.validation.as_ref().expect("notice raised");
        assert_eq!(notice.message, SELECT_PROMPT);
    }

    #[test]
    fn repeated_failures_bump_the_notice_seq() {
        let s = session();
        let s = advance(s, "businessType", "");
        let first = s.validation.as_ref().unwrap().seq;
        let s = advance(s, "businessType", "");
        let second = s.validation.as_ref().unwrap().seq;
        assert!(second > first);
    }

    #[test]
    fn answers_survive_a_retreat() {
        let s = advance(session(), "businessType", "retail");
        assert_eq!(s.step, 2);
        let s = s.reduce(FormAction::Retreat);
        assert_eq!(s.step, 1);
        assert_eq!(s.answer("businessType"), Some("retail"));
    }

    #[test]
    fn retreat_at_step_one_is_a_noop() {
        let s = session().reduce(FormAction::Retreat);
        assert_eq!(s.step, 1);
    }

    #[test]
    fn successful_advance_clears_a_pending_notice() {
        let s = advance(session(), "businessType", "");
        assert!(s.validation.is_some());
        let s = advance(s, "businessType", "services");
        assert!(s.validation.is_none());
        assert_eq!(s.step, 2);
    }

    #[test]
    fn dismissal_is_idempotent() {
        let s = advance(session(), "businessType", "");
        let s = s.reduce(FormAction::DismissValidation);
        assert!(s.validation.is_none());
        let again = s.clone().reduce(FormAction::DismissValidation);
        assert!(Rc::ptr_eq(&s, &again));
    }

    #[test]
    fn submit_is_rejected_before_the_review_step() {
        let s = session().reduce(FormAction::Submit);
        assert!(s.result.is_none());
        assert_eq!(s.step, 1);
    }

    #[test]
    fn submit_at_the_review_step_scores_the_answers() {
        let mut s = session();
        for (field, value) in FIELDS {
            s = advance(s, field, value);
        }
        let s = s.reduce(FormAction::Submit);
        let result = s.result.as_ref().expect("scored");
        assert_eq!(result.percentage, 100);
        assert_eq!(result.tier, Tier::Excellent);
        assert!(s.is_submitted());
    }

    #[test]
    fn the_session_is_terminal_after_submit() {
        let mut s = session();
        for (field, value) in FIELDS {
            s = advance(s, field, value);
        }
        let s = s.reduce(FormAction::Submit);
        let after = s.clone().reduce(FormAction::Retreat);
        assert!(Rc::ptr_eq(&s, &after));
        let after = s
            .clone()
            .reduce(FormAction::Advance {
                field: "businessType",
                value: "other".to_string(),
            });
        assert!(Rc::ptr_eq(&s, &after));
        let after = s.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&s, &after));
    }

    #[test]
    fn advance_saturates_at_the_review_step() {
        let mut s = session();
        for (field, value) in FIELDS {
            s = advance(s, field, value);
        }
        assert_eq!(s.step, TOTAL_STEPS);
        let s = advance(s, "employees", "1-5");
        assert_eq!(s.step, TOTAL_STEPS);
    }
}

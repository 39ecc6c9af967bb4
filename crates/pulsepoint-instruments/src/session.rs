//! In-progress administration of a single instrument.
//!
//! A session tracks responses and a cursor through the item list so a
//! caller can drive one-question-at-a-time administration, move backward
//! to revise an answer, and finish with a scored, interpreted result.

use pulsepoint_core::models::AssessmentRecord;

use crate::error::InstrumentError;
use crate::interpret::{interpret, Interpretation};
use crate::scoring::{compute_score, Response, ResponseSet, ScoreResult};
use crate::{get_instrument, Instrument};

/// A live administration of one instrument for one client.
pub struct AssessmentSession {
    instrument: Box<dyn Instrument>,
    responses: ResponseSet,
    cursor: usize,
    notes: Option<String>,
}

impl AssessmentSession {
    /// Start a session for the given instrument ID.
    pub fn new(instrument_id: &str) -> Result<Self, InstrumentError> {
        let instrument = get_instrument(instrument_id)
            .ok_or_else(|| InstrumentError::UnknownInstrument(instrument_id.to_string()))?;
        Ok(Self {
            instrument,
            responses: ResponseSet::new(),
            cursor: 0,
            notes: None,
        })
    }

    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// Position of the item currently awaiting an answer.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Record an answer for the current item and advance. The response is
    /// validated against the instrument's scale before it is stored.
    pub fn answer(&mut self, response: Response) -> Result<(), InstrumentError> {
        let mut probe = ResponseSet::new();
        probe.record(self.cursor, response.clone());
        if let Some(error) = self.instrument.validate_responses(&probe).into_iter().next() {
            return Err(error.into());
        }
        self.responses.record(self.cursor, response);
        self.advance();
        Ok(())
    }

    /// Skip the current item and advance. Skipped items are excluded from
    /// the total rather than scored as zero.
    pub fn skip(&mut self) {
        self.responses.skip(self.cursor);
        self.advance();
    }

    /// Move back to the previous item so its answer can be revised.
    pub fn previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move forward past an already-visited item without changing it.
    pub fn next(&mut self) {
        if self.cursor < self.instrument.items().len() {
            self.cursor += 1;
        }
    }

    fn advance(&mut self) {
        // A negative gate answer ends the administration early.
        if let Some(gate) = self.instrument.gate_item() {
            if self.cursor == gate
                && matches!(self.responses.get(gate), Some(Response::YesNo(false)))
            {
                self.cursor = self.instrument.items().len();
                return;
            }
        }
        if self.cursor < self.instrument.items().len() {
            self.cursor += 1;
        }
    }

    /// Fraction of items visited so far, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        let total = self.instrument.items().len();
        if total == 0 {
            return 1.0;
        }
        self.cursor.min(total) as f64 / total as f64
    }

    /// True once every item has been answered or skipped, or a gate has
    /// closed the session.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.instrument.items().len()
    }

    /// Score and interpret the recorded responses.
    pub fn finish(&self) -> Result<(ScoreResult, Interpretation), InstrumentError> {
        let instrument = self.instrument.as_ref();
        if let Some(error) = instrument
            .validate_responses(&self.responses)
            .into_iter()
            .next()
        {
            return Err(error.into());
        }
        let score = compute_score(instrument, &self.responses)?;
        let interpretation = interpret(instrument, &score)?;
        Ok((score, interpretation))
    }

    /// Score the session and package it as a persistable record.
    pub fn to_record(
        &self,
        client_name: &str,
        date_administered: jiff::civil::Date,
    ) -> Result<AssessmentRecord, InstrumentError> {
        let (score, interpretation) = self.finish()?;
        Ok(AssessmentRecord {
            id: uuid::Uuid::new_v4(),
            instrument_id: self.instrument.id().to_string(),
            client_name: client_name.to_string(),
            date_administered,
            scores: serde_json::to_value(&score)?,
            result: interpretation.category.clone(),
            risk_level: interpretation.risk,
            notes: self.notes.clone(),
            created_at: jiff::Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Response;

    #[test]
    fn answers_advance_the_cursor() {
        let mut session = AssessmentSession::new("phq9").unwrap();
        assert_eq!(session.cursor(), 0);
        session.answer(Response::Rating(2)).unwrap();
        assert_eq!(session.cursor(), 1);
        assert!(!session.is_complete());
    }

    #[test]
    fn previous_allows_revision() {
        let mut session = AssessmentSession::new("gad7").unwrap();
        session.answer(Response::Rating(3)).unwrap();
        session.previous();
        session.answer(Response::Rating(1)).unwrap();
        assert_eq!(session.responses().get(0), Some(&Response::Rating(1)));
    }

    #[test]
    fn negative_gate_completes_the_session() {
        let mut session = AssessmentSession::new("pc_ptsd5").unwrap();
        session.answer(Response::YesNo(false)).unwrap();
        assert!(session.is_complete());
        let (score, interpretation) = session.finish().unwrap();
        assert_eq!(score.total, 0);
        assert_eq!(interpretation.category, "Negative Screen");
    }

    #[test]
    fn out_of_scale_answer_is_rejected() {
        let mut session = AssessmentSession::new("phq9").unwrap();
        assert!(session.answer(Response::Rating(9)).is_err());
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn full_administration_scores_and_interprets() {
        let mut session = AssessmentSession::new("gad7").unwrap();
        for _ in 0..7 {
            session.answer(Response::Rating(2)).unwrap();
        }
        assert!(session.is_complete());
        assert!((session.progress() - 1.0).abs() < f64::EPSILON);
        let (score, interpretation) = session.finish().unwrap();
        assert_eq!(score.total, 14);
        assert_eq!(interpretation.category, "Moderate Anxiety");
    }

    #[test]
    fn to_record_captures_result_and_risk() {
        let mut session = AssessmentSession::new("tsq").unwrap();
        for _ in 0..10 {
            session.answer(Response::YesNo(true)).unwrap();
        }
        session.set_notes(Some("Follow-up in two weeks.".to_string()));
        let record = session
            .to_record("Jordan Avery", jiff::civil::date(2025, 5, 8))
            .unwrap();
        assert_eq!(record.instrument_id, "tsq");
        assert_eq!(record.result, "High Risk for PTSD");
        assert_eq!(
            record.risk_level,
            Some(pulsepoint_core::risk::RiskLevel::High)
        );
        assert_eq!(record.scores["total"], 10);
        assert_eq!(record.notes.as_deref(), Some("Follow-up in two weeks."));
    }
}

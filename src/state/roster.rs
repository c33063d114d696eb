//! In-memory roster of groups, teams, matches, and jornadas. This is the
//! canonical tournament state; persistence only mirrors it.

use indexmap::IndexMap;
use thiserror::Error;
use uuid::Uuid;

/// Access level supplied by the caller for mutation gating.
///
/// The roster does not authenticate anyone; the HTTP layer resolves the admin
/// token and hands the resulting capability down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Privileged caller allowed to mutate the roster.
    Admin,
    /// Read-only caller; every mutation is rejected.
    Viewer,
}

impl Access {
    /// Whether this access level permits mutations.
    pub fn can_mutate(self) -> bool {
        matches!(self, Access::Admin)
    }
}

/// Errors surfaced by roster mutations. All are recoverable and map to
/// user-facing messages in the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Referenced group, team, or match does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// Group id or team name collides with an existing entry.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    /// Rejected input, e.g. a negative score or a team playing itself.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Operation would break a structural invariant of the tournament.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
    /// Caller lacks the privilege required for mutations.
    #[error("permission denied")]
    PermissionDenied,
}

/// A single fixture inside a jornada (calendar display only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// Local team name.
    pub local: String,
    /// Visiting team name.
    pub visiting: String,
}

/// A scheduled match day: a round label plus its ordered fixtures.
///
/// Jornadas are informational; the standings engine never reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jornada {
    /// Ordered round label, e.g. "Jornada 2".
    pub label: String,
    /// Fixtures listed for this round.
    pub fixtures: Vec<Fixture>,
}

/// A partition of teams competing against each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    /// Team names in insertion order (display order, not ranking order).
    pub teams: Vec<String>,
    /// Calendar entries for this group.
    pub jornadas: Vec<Jornada>,
}

/// Optional scheduling metadata attached to a match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Weekday label, e.g. "VIE.".
    pub day: Option<String>,
    /// Calendar date, free-form.
    pub date: Option<String>,
    /// Kick-off time, free-form.
    pub time: Option<String>,
    /// Venue name.
    pub venue: Option<String>,
}

/// A scheduled or played match between two teams of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Opaque match identifier.
    pub id: Uuid,
    /// Group the match belongs to. Denormalised: must match the group of both
    /// participants, but no automatic repair happens if it drifts.
    pub group: String,
    /// Local team name.
    pub local: String,
    /// Visiting team name; always differs from `local`.
    pub visiting: String,
    /// Goals scored by the local team, once recorded.
    pub local_score: Option<u32>,
    /// Goals scored by the visiting team, once recorded.
    pub visiting_score: Option<u32>,
    /// Whether the result has been recorded.
    pub played: bool,
    /// Scheduling metadata, ignored by the standings engine.
    pub schedule: Schedule,
}

impl Match {
    /// A match is final exactly when both scores are recorded and it is
    /// marked played.
    pub fn is_final(&self) -> bool {
        self.played && self.local_score.is_some() && self.visiting_score.is_some()
    }
}

/// Fields needed to create or edit a match. Scores are never set through a
/// draft; [`Roster::record_score`] is the only way to finalise a result.
#[derive(Debug, Clone)]
pub struct MatchDraft {
    /// Target group label.
    pub group: String,
    /// Local team name.
    pub local: String,
    /// Visiting team name.
    pub visiting: String,
    /// Scheduling metadata for the calendar.
    pub schedule: Schedule,
}

/// Canonical tournament state: groups keyed by label, matches keyed by id.
/// Both maps preserve insertion order for stable display.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    groups: IndexMap<String, Group>,
    matches: IndexMap<Uuid, Match>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups in insertion order.
    pub fn groups(&self) -> &IndexMap<String, Group> {
        &self.groups
    }

    /// Look up a group by label.
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.get(id)
    }

    /// All matches in insertion order.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.values()
    }

    /// Look up a match by id.
    pub fn match_by_id(&self, id: Uuid) -> Option<&Match> {
        self.matches.get(&id)
    }

    /// Matches belonging to a group, in insertion order.
    pub fn matches_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Match> {
        self.matches.values().filter(move |m| m.group == group)
    }

    /// Replace the whole roster with a snapshot loaded from storage.
    pub fn replace(&mut self, groups: IndexMap<String, Group>, matches: IndexMap<Uuid, Match>) {
        self.groups = groups;
        self.matches = matches;
    }

    /// Create an empty group. Fails with [`RosterError::DuplicateKey`] when
    /// the label is already taken.
    pub fn add_group(&mut self, access: Access, id: &str) -> Result<&Group, RosterError> {
        ensure_mutate(access)?;
        if self.groups.contains_key(id) {
            return Err(RosterError::DuplicateKey(format!(
                "group `{id}` already exists"
            )));
        }
        Ok(self.groups.entry(id.to_owned()).or_default())
    }

    /// Remove a group and its teams. The last remaining group cannot be
    /// deleted; matches referencing the removed teams are left dangling.
    pub fn remove_group(&mut self, access: Access, id: &str) -> Result<Group, RosterError> {
        ensure_mutate(access)?;
        if self.groups.contains_key(id) && self.groups.len() == 1 {
            return Err(RosterError::InvariantViolation(
                "cannot delete the last remaining group".into(),
            ));
        }
        // shift_remove keeps the display order of the surviving groups.
        self.groups
            .shift_remove(id)
            .ok_or_else(|| RosterError::NotFound(format!("group `{id}` not found")))
    }

    /// Append a team to a group, preserving insertion order.
    pub fn add_team(&mut self, access: Access, group: &str, name: &str) -> Result<(), RosterError> {
        ensure_mutate(access)?;
        let entry = self
            .groups
            .get_mut(group)
            .ok_or_else(|| RosterError::NotFound(format!("group `{group}` not found")))?;
        if entry.teams.iter().any(|t| t == name) {
            return Err(RosterError::DuplicateKey(format!(
                "team `{name}` already exists in group `{group}`"
            )));
        }
        entry.teams.push(name.to_owned());
        Ok(())
    }

    /// Rename a team in place, keeping its position in the list.
    ///
    /// Existing matches that reference the old name are deliberately left
    /// untouched; see the calendar/matches screens for how stale names are
    /// surfaced to administrators.
    pub fn rename_team(
        &mut self,
        access: Access,
        group: &str,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), RosterError> {
        ensure_mutate(access)?;
        let entry = self
            .groups
            .get_mut(group)
            .ok_or_else(|| RosterError::NotFound(format!("group `{group}` not found")))?;
        if old_name != new_name && entry.teams.iter().any(|t| t == new_name) {
            return Err(RosterError::DuplicateKey(format!(
                "team `{new_name}` already exists in group `{group}`"
            )));
        }
        let slot = entry
            .teams
            .iter_mut()
            .find(|t| t.as_str() == old_name)
            .ok_or_else(|| {
                RosterError::NotFound(format!("team `{old_name}` not found in group `{group}`"))
            })?;
        *slot = new_name.to_owned();
        Ok(())
    }

    /// Remove a team from a group's list. Matches referencing the team are
    /// not touched.
    pub fn remove_team(
        &mut self,
        access: Access,
        group: &str,
        name: &str,
    ) -> Result<(), RosterError> {
        ensure_mutate(access)?;
        let entry = self
            .groups
            .get_mut(group)
            .ok_or_else(|| RosterError::NotFound(format!("group `{group}` not found")))?;
        let position = entry.teams.iter().position(|t| t == name).ok_or_else(|| {
            RosterError::NotFound(format!("team `{name}` not found in group `{group}`"))
        })?;
        entry.teams.remove(position);
        Ok(())
    }

    /// Schedule a new pending match and return it.
    pub fn add_match(&mut self, access: Access, draft: MatchDraft) -> Result<&Match, RosterError> {
        ensure_mutate(access)?;
        validate_draft(&draft)?;
        if !self.groups.contains_key(&draft.group) {
            return Err(RosterError::NotFound(format!(
                "group `{}` not found",
                draft.group
            )));
        }

        let id = Uuid::new_v4();
        let entry = Match {
            id,
            group: draft.group,
            local: draft.local,
            visiting: draft.visiting,
            local_score: None,
            visiting_score: None,
            played: false,
            schedule: draft.schedule,
        };
        Ok(self.matches.entry(id).or_insert(entry))
    }

    /// Edit the teams or scheduling metadata of an existing match. Recorded
    /// scores and the played flag are preserved.
    pub fn update_match(
        &mut self,
        access: Access,
        id: Uuid,
        draft: MatchDraft,
    ) -> Result<&Match, RosterError> {
        ensure_mutate(access)?;
        validate_draft(&draft)?;
        if !self.groups.contains_key(&draft.group) {
            return Err(RosterError::NotFound(format!(
                "group `{}` not found",
                draft.group
            )));
        }
        let entry = self
            .matches
            .get_mut(&id)
            .ok_or_else(|| RosterError::NotFound(format!("match `{id}` not found")))?;
        entry.group = draft.group;
        entry.local = draft.local;
        entry.visiting = draft.visiting;
        entry.schedule = draft.schedule;
        Ok(entry)
    }

    /// Record both scores and mark the match played.
    ///
    /// Repeating the call with the same values is a no-op; a privileged
    /// caller may also overwrite a final result. The routine UI flow disables
    /// edits on final matches, but the store does not enforce immutability.
    pub fn record_score(
        &mut self,
        access: Access,
        id: Uuid,
        local_score: i32,
        visiting_score: i32,
    ) -> Result<&Match, RosterError> {
        ensure_mutate(access)?;
        if local_score < 0 || visiting_score < 0 {
            return Err(RosterError::InvalidArgument(format!(
                "scores must be non-negative (got {local_score}-{visiting_score})"
            )));
        }
        let entry = self
            .matches
            .get_mut(&id)
            .ok_or_else(|| RosterError::NotFound(format!("match `{id}` not found")))?;
        entry.local_score = Some(local_score as u32);
        entry.visiting_score = Some(visiting_score as u32);
        entry.played = true;
        Ok(entry)
    }

    /// Delete a match entirely.
    pub fn delete_match(&mut self, access: Access, id: Uuid) -> Result<Match, RosterError> {
        ensure_mutate(access)?;
        self.matches
            .shift_remove(&id)
            .ok_or_else(|| RosterError::NotFound(format!("match `{id}` not found")))
    }

    /// Append a jornada to a group's calendar.
    pub fn add_jornada(
        &mut self,
        access: Access,
        group: &str,
        jornada: Jornada,
    ) -> Result<(), RosterError> {
        ensure_mutate(access)?;
        let entry = self
            .groups
            .get_mut(group)
            .ok_or_else(|| RosterError::NotFound(format!("group `{group}` not found")))?;
        if entry.jornadas.iter().any(|j| j.label == jornada.label) {
            return Err(RosterError::DuplicateKey(format!(
                "jornada `{}` already exists in group `{group}`",
                jornada.label
            )));
        }
        entry.jornadas.push(jornada);
        Ok(())
    }

    /// Remove a jornada from a group's calendar by label.
    pub fn remove_jornada(
        &mut self,
        access: Access,
        group: &str,
        label: &str,
    ) -> Result<(), RosterError> {
        ensure_mutate(access)?;
        let entry = self
            .groups
            .get_mut(group)
            .ok_or_else(|| RosterError::NotFound(format!("group `{group}` not found")))?;
        let position = entry
            .jornadas
            .iter()
            .position(|j| j.label == label)
            .ok_or_else(|| {
                RosterError::NotFound(format!("jornada `{label}` not found in group `{group}`"))
            })?;
        entry.jornadas.remove(position);
        Ok(())
    }
}

fn ensure_mutate(access: Access) -> Result<(), RosterError> {
    if access.can_mutate() {
        Ok(())
    } else {
        Err(RosterError::PermissionDenied)
    }
}

fn validate_draft(draft: &MatchDraft) -> Result<(), RosterError> {
    if draft.local == draft.visiting {
        return Err(RosterError::InvalidArgument(format!(
            "a team cannot play itself (`{}`)",
            draft.local
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with_group(id: &str) -> Roster {
        let mut roster = Roster::new();
        roster.add_group(Access::Admin, id).unwrap();
        roster
    }

    fn draft(group: &str, local: &str, visiting: &str) -> MatchDraft {
        MatchDraft {
            group: group.into(),
            local: local.into(),
            visiting: visiting.into(),
            schedule: Schedule::default(),
        }
    }

    #[test]
    fn add_group_rejects_duplicates() {
        let mut roster = roster_with_group("A");
        let err = roster.add_group(Access::Admin, "A").unwrap_err();
        assert!(matches!(err, RosterError::DuplicateKey(_)));
    }

    #[test]
    fn last_group_cannot_be_deleted() {
        let mut roster = roster_with_group("A");
        let err = roster.remove_group(Access::Admin, "A").unwrap_err();
        assert!(matches!(err, RosterError::InvariantViolation(_)));
        assert!(roster.group("A").is_some());

        roster.add_group(Access::Admin, "B").unwrap();
        roster.remove_group(Access::Admin, "A").unwrap();
        assert!(roster.group("A").is_none());
        assert!(roster.group("B").is_some());
    }

    #[test]
    fn team_names_unique_within_group() {
        let mut roster = roster_with_group("A");
        roster.add_team(Access::Admin, "A", "SAN JOSE").unwrap();
        let err = roster.add_team(Access::Admin, "A", "SAN JOSE").unwrap_err();
        assert!(matches!(err, RosterError::DuplicateKey(_)));

        // The same name is fine in a different group.
        roster.add_group(Access::Admin, "B").unwrap();
        roster.add_team(Access::Admin, "B", "SAN JOSE").unwrap();
    }

    #[test]
    fn rename_keeps_order_and_does_not_cascade() {
        let mut roster = roster_with_group("A");
        roster.add_team(Access::Admin, "A", "ALASKA FC").unwrap();
        roster.add_team(Access::Admin, "A", "PARURUAKA").unwrap();
        roster.add_team(Access::Admin, "A", "SANTA RITA").unwrap();

        let match_id = roster
            .add_match(Access::Admin, draft("A", "PARURUAKA", "SANTA RITA"))
            .unwrap()
            .id;

        roster
            .rename_team(Access::Admin, "A", "PARURUAKA", "CERVECEROS")
            .unwrap();

        let teams = &roster.group("A").unwrap().teams;
        assert_eq!(teams, &["ALASKA FC", "CERVECEROS", "SANTA RITA"]);

        // The match still references the old name; no repair is attempted.
        assert_eq!(roster.match_by_id(match_id).unwrap().local, "PARURUAKA");
    }

    #[test]
    fn rename_to_existing_name_is_rejected() {
        let mut roster = roster_with_group("A");
        roster.add_team(Access::Admin, "A", "ALASKA FC").unwrap();
        roster.add_team(Access::Admin, "A", "PARURUAKA").unwrap();
        let err = roster
            .rename_team(Access::Admin, "A", "PARURUAKA", "ALASKA FC")
            .unwrap_err();
        assert!(matches!(err, RosterError::DuplicateKey(_)));
    }

    #[test]
    fn remove_team_leaves_matches_dangling() {
        let mut roster = roster_with_group("A");
        roster.add_team(Access::Admin, "A", "ESEQUIBO FC").unwrap();
        roster.add_team(Access::Admin, "A", "SANTA RITA").unwrap();
        let match_id = roster
            .add_match(Access::Admin, draft("A", "ESEQUIBO FC", "SANTA RITA"))
            .unwrap()
            .id;

        roster.remove_team(Access::Admin, "A", "ESEQUIBO FC").unwrap();
        assert!(roster.match_by_id(match_id).is_some());
    }

    #[test]
    fn match_requires_distinct_teams() {
        let mut roster = roster_with_group("A");
        let err = roster
            .add_match(Access::Admin, draft("A", "SAN JOSE", "SAN JOSE"))
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidArgument(_)));
    }

    #[test]
    fn negative_score_leaves_match_unmodified() {
        let mut roster = roster_with_group("A");
        let id = roster
            .add_match(Access::Admin, draft("A", "SAN JOSE", "ALASKA FC"))
            .unwrap()
            .id;

        let err = roster.record_score(Access::Admin, id, -1, 2).unwrap_err();
        assert!(matches!(err, RosterError::InvalidArgument(_)));

        let entry = roster.match_by_id(id).unwrap();
        assert!(!entry.played);
        assert_eq!(entry.local_score, None);
        assert_eq!(entry.visiting_score, None);
    }

    #[test]
    fn record_score_is_repeatable_and_overwrites() {
        let mut roster = roster_with_group("A");
        let id = roster
            .add_match(Access::Admin, draft("A", "SAN JOSE", "ALASKA FC"))
            .unwrap()
            .id;

        roster.record_score(Access::Admin, id, 2, 1).unwrap();
        assert!(roster.match_by_id(id).unwrap().is_final());

        // Same values: no-op. Different values: overwrite.
        roster.record_score(Access::Admin, id, 2, 1).unwrap();
        roster.record_score(Access::Admin, id, 0, 3).unwrap();
        let entry = roster.match_by_id(id).unwrap();
        assert_eq!(entry.local_score, Some(0));
        assert_eq!(entry.visiting_score, Some(3));
    }

    #[test]
    fn viewer_cannot_mutate() {
        let mut roster = roster_with_group("A");
        assert_eq!(
            roster.add_group(Access::Viewer, "B").unwrap_err(),
            RosterError::PermissionDenied
        );
        assert_eq!(
            roster.add_team(Access::Viewer, "A", "SAN JOSE").unwrap_err(),
            RosterError::PermissionDenied
        );
        assert_eq!(
            roster.remove_group(Access::Viewer, "A").unwrap_err(),
            RosterError::PermissionDenied
        );
        assert!(roster.group("A").is_some());
    }

    #[test]
    fn jornadas_are_labelled_uniquely_per_group() {
        let mut roster = roster_with_group("A");
        let jornada = Jornada {
            label: "Jornada 2".into(),
            fixtures: vec![Fixture {
                local: "SAN JOSE".into(),
                visiting: "ALASKA FC".into(),
            }],
        };
        roster
            .add_jornada(Access::Admin, "A", jornada.clone())
            .unwrap();
        let err = roster.add_jornada(Access::Admin, "A", jornada).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateKey(_)));

        roster
            .remove_jornada(Access::Admin, "A", "Jornada 2")
            .unwrap();
        assert!(roster.group("A").unwrap().jornadas.is_empty());
    }
}

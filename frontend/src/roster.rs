use shared::{CandidateId, Roster, ValidationError};

const MENTORS: [(CandidateId, &str); 20] = [
    (1, "mentor_01.svg"),
    (2, "mentor_02.svg"),
    (3, "mentor_03.svg"),
    (4, "mentor_04.svg"),
    (5, "mentor_05.svg"),
    (6, "mentor_06.svg"),
    (7, "mentor_07.svg"),
    (8, "mentor_08.svg"),
    (9, "mentor_09.svg"),
    (10, "mentor_10.svg"),
    (11, "mentor_11.svg"),
    (12, "mentor_12.svg"),
    (13, "mentor_13.svg"),
    (14, "mentor_14.svg"),
    (15, "mentor_15.svg"),
    (16, "mentor_16.svg"),
    (17, "mentor_17.svg"),
    (18, "mentor_18.svg"),
    (19, "mentor_19.svg"),
    (20, "mentor_20.svg"),
];

pub fn mentor_roster() -> Result<Roster, ValidationError> {
    Roster::from_pairs(MENTORS)
}

//! # Event Code Tables
//!
//! The public event dataset identifies event types, sub-event types and
//! qualifier tags by bare integers. Each table below is declared once as
//! `(variant, code, label)` triples and expanded into a closed enum with
//! `code()`, `label()`, `TryFrom<u16>` and integer serde.
//!
//! ## Reference
//! - Wyscout public dataset: `eventid2name.csv`, `tags2name.csv`

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A code that is not part of the named table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown {table} code: {code}")]
pub struct UnknownCode {
    pub table: &'static str,
    pub code: u16,
}

macro_rules! code_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every variant, in code order.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// Dataset code.
            pub const fn code(self) -> u16 {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Human-readable name as used by the dataset.
            pub const fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl TryFrom<u16> for $name {
            type Error = UnknownCode;

            fn try_from(code: u16) -> Result<Self, Self::Error> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    other => Err(UnknownCode { table: stringify!($name), code: other }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u16(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = u16::deserialize(deserializer)?;
                $name::try_from(code).map_err(D::Error::custom)
            }
        }
    };
}

code_table! {
    /// Top-level event type (`eventId`).
    pub enum EventKind {
        Duel = 1 => "Duel",
        Foul = 2 => "Foul",
        FreeKick = 3 => "Free Kick",
        GoalkeeperLeavingLine = 4 => "Goalkeeper leaving line",
        Interruption = 5 => "Interruption",
        Offside = 6 => "Offside",
        OthersOnTheBall = 7 => "Others on the ball",
        Pass = 8 => "Pass",
        SaveAttempt = 9 => "Save attempt",
        Shot = 10 => "Shot",
    }
}

code_table! {
    /// Finer-grained event type (`subEventId`).
    pub enum SubEventKind {
        AirDuel = 10 => "Air duel",
        GroundAttackingDuel = 11 => "Ground attacking duel",
        GroundDefendingDuel = 12 => "Ground defending duel",
        GroundLooseBallDuel = 13 => "Ground loose ball duel",
        Foul = 20 => "Foul",
        HandFoul = 21 => "Hand foul",
        LateCardFoul = 22 => "Late card foul",
        OutOfGameFoul = 23 => "Out of game foul",
        Protest = 24 => "Protest",
        Simulation = 25 => "Simulation",
        TimeLostFoul = 26 => "Time lost foul",
        ViolentFoul = 27 => "Violent Foul",
        Corner = 30 => "Corner",
        FreeKick = 31 => "Free Kick",
        FreeKickCross = 32 => "Free kick cross",
        GoalKick = 33 => "Goal kick",
        ThrowIn = 34 => "Throw in",
        Penalty = 35 => "Penalty",
        FreeKickShot = 36 => "Free kick shot",
        GoalkeeperLeavingLine = 40 => "Goalkeeper leaving line",
        BallOutOfTheField = 50 => "Ball out of the field",
        Whistle = 51 => "Whistle",
        Acceleration = 70 => "Acceleration",
        Clearance = 71 => "Clearance",
        Touch = 72 => "Touch",
        Cross = 80 => "Cross",
        HandPass = 81 => "Hand pass",
        HeadPass = 82 => "Head pass",
        HighPass = 83 => "High pass",
        Launch = 84 => "Launch",
        SimplePass = 85 => "Simple pass",
        SmartPass = 86 => "Smart pass",
        Reflexes = 90 => "Reflexes",
        SaveAttempt = 91 => "Save attempt",
        Shot = 100 => "Shot",
    }
}

code_table! {
    /// Outcome or qualifier attached to an event (`tags[].id`).
    pub enum Tag {
        Goal = 101 => "Goal",
        OwnGoal = 102 => "Own goal",
        Opportunity = 201 => "Opportunity",
        Assist = 301 => "Assist",
        KeyPass = 302 => "Key pass",
        LeftFoot = 401 => "Left foot",
        RightFoot = 402 => "Right foot",
        HeadBody = 403 => "Head/body",
        FreeSpaceRight = 501 => "Free space right",
        FreeSpaceLeft = 502 => "Free space left",
        TakeOnLeft = 503 => "Take on left",
        TakeOnRight = 504 => "Take on right",
        Anticipated = 601 => "Anticipated",
        Anticipation = 602 => "Anticipation",
        Lost = 701 => "Lost",
        Neutral = 702 => "Neutral",
        Won = 703 => "Won",
        High = 801 => "High",
        Low = 802 => "Low",
        Through = 901 => "Through",
        Fairplay = 1001 => "Fairplay",
        Direct = 1101 => "Direct",
        Indirect = 1102 => "Indirect",
        GoalLowCenter = 1201 => "Goal low center",
        GoalLowRight = 1202 => "Goal low right",
        GoalCenter = 1203 => "Goal center",
        GoalCenterLeft = 1204 => "Goal center left",
        GoalLowLeft = 1205 => "Goal low left",
        GoalCenterRight = 1206 => "Goal center right",
        GoalHighCenter = 1207 => "Goal high center",
        GoalHighLeft = 1208 => "Goal high left",
        GoalHighRight = 1209 => "Goal high right",
        OutLowRight = 1210 => "Out low right",
        OutCenterLeft = 1211 => "Out center left",
        OutLowLeft = 1212 => "Out low left",
        OutCenterRight = 1213 => "Out center right",
        OutHighCenter = 1214 => "Out high center",
        OutHighLeft = 1215 => "Out high left",
        OutHighRight = 1216 => "Out high right",
        PostLowRight = 1217 => "Post low right",
        PostCenterLeft = 1218 => "Post center left",
        PostLowLeft = 1219 => "Post low left",
        PostCenterRight = 1220 => "Post center right",
        PostHighCenter = 1221 => "Post high center",
        PostHighLeft = 1222 => "Post high left",
        PostHighRight = 1223 => "Post high right",
        Feint = 1301 => "Feint",
        MissedBall = 1302 => "Missed ball",
        Interception = 1401 => "Interception",
        Clearance = 1501 => "Clearance",
        SlidingTackle = 1601 => "Sliding tackle",
        RedCard = 1701 => "Red card",
        YellowCard = 1702 => "Yellow card",
        SecondYellowCard = 1703 => "Second yellow card",
        Accurate = 1801 => "Accurate",
        NotAccurate = 1802 => "Not accurate",
        CounterAttack = 1901 => "Counter attack",
        DangerousBallLost = 2001 => "Dangerous ball lost",
        Blocked = 2101 => "Blocked",
    }
}

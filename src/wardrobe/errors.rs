use thiserror::Error;

/// Broad family a [`ClothingError`] belongs to. Every class is recoverable:
/// the call is rejected and the wearer is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The item is in the wrong state for the request.
    Precondition,
    /// A configured count or length limit would be exceeded.
    Limit,
    /// The covering relation between garments forbids the request.
    CoverageConflict,
}

/// Rejections produced by the coverage engine and tailoring helpers.
///
/// Display strings are phrased for the player issuing the command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClothingError {
    #[error("You aren't carrying {0}.")]
    NotInInventory(String),

    #[error("{0} isn't clothing.")]
    NotClothing(String),

    #[error("You're already wearing {0}!")]
    AlreadyWorn(String),

    #[error("You're not wearing {0}!")]
    NotWorn(String),

    #[error("You're already carrying {0}.")]
    AlreadyCarried(String),

    #[error("{recipient} already has {item}.")]
    RecipientHasItem { recipient: String, item: String },

    #[error("You can't wear any more clothes (limit {limit}).")]
    OverallLimitExceeded { limit: usize },

    #[error("You can't wear more than {limit} of type {clothing_type}.")]
    TypeLimitExceeded { clothing_type: String, limit: usize },

    #[error("Please keep your wear style to {max} characters or fewer.")]
    StyleTooLong { max: usize },

    #[error("You can't cover {0} with itself!")]
    SelfCover(String),

    #[error("You're not wearing {0}!")]
    TargetNotWorn(String),

    #[error("{target} is already covered by {by}.")]
    AlreadyCovered { target: String, by: String },

    #[error("{covering} is covered by {by}.")]
    CoveringAlreadyCovered { covering: String, by: String },

    #[error("You can't cover anything with {covering} ({clothing_type}).")]
    ForbiddenCoverType { covering: String, clothing_type: String },

    #[error("{0} isn't covered by anything.")]
    NotCovered(String),

    #[error("Too many layers: {covering} is itself covered, so {target} can't be uncovered.")]
    LayeredTooDeep { target: String, covering: String },

    #[error("You need to remove {blocker} first.")]
    BlockedByCovering { target: String, blocker: String },

    #[error("You can't part with {target} while it's covered by {blocker}.")]
    CoveredCannotTransfer { target: String, blocker: String },

    #[error("Take off {0} before altering it.")]
    TailoringWornGarment(String),

    #[error("{item} already covers {slot}.")]
    SlotAlreadyCovered { item: String, slot: String },

    #[error("{item} doesn't cover {slot}.")]
    SlotNotCovered { item: String, slot: String },

    #[error("{0} is not a naked area.")]
    UnknownSlot(String),

    #[error("{0} is not a clothing message.")]
    UnknownMessage(String),
}

impl ClothingError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ClothingError::OverallLimitExceeded { .. }
            | ClothingError::TypeLimitExceeded { .. }
            | ClothingError::StyleTooLong { .. } => ErrorClass::Limit,
            ClothingError::AlreadyCovered { .. }
            | ClothingError::CoveringAlreadyCovered { .. }
            | ClothingError::ForbiddenCoverType { .. }
            | ClothingError::LayeredTooDeep { .. }
            | ClothingError::BlockedByCovering { .. }
            | ClothingError::CoveredCannotTransfer { .. } => ErrorClass::CoverageConflict,
            _ => ErrorClass::Precondition,
        }
    }
}

/// Errors that can arise while loading wardrobe seed data.
#[derive(Debug, Error)]
pub enum WardrobeError {
    /// Wrapper around IO errors (reading seed files).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON parse errors.
    #[error("seed parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two seed items share one id.
    #[error("duplicate item id: {0}")]
    DuplicateItem(String),

    /// A seed entry was rejected by the coverage engine.
    #[error("seed rejected: {0}")]
    Clothing(#[from] ClothingError),
}

pub const DEFAULT_TOP_SKILLS: i64 = 10;
pub const MAX_TOP_SKILLS: i64 = 50;

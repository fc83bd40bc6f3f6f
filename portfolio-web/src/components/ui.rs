pub mod foundation;
pub mod range;
pub mod section_header;
pub mod skill_bar;
pub mod tag_list;

pub use range::Range;
pub use section_header::SectionHeader;
pub use skill_bar::SkillBar;
pub use tag_list::TagList;

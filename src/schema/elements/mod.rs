//! Schema element kinds.
//!
//! Each element keeps the references it was declared with and, once its
//! owning [`Schema`](crate::schema::Schema) is built, the resolved numeric
//! OIDs those references point to.

pub mod attribute_type;
pub mod dit_content_rule;
pub mod dit_structure_rule;
pub mod matching_rule;
pub mod matching_rule_use;
pub mod name_form;
pub mod object_class;
pub mod syntax;

pub use attribute_type::{AttributeType, ResolvedAttributeType};
pub use dit_content_rule::{DitContentRule, ResolvedDitContentRule};
pub use dit_structure_rule::DitStructureRule;
pub use matching_rule::{MatchingRule, ResolvedMatchingRule, RuleAssertion};
pub use matching_rule_use::MatchingRuleUse;
pub use name_form::{NameForm, ResolvedNameForm};
pub use object_class::{ObjectClass, ResolvedObjectClass};
pub use syntax::{Syntax, SyntaxImplementation};

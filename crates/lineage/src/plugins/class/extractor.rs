//! Member extraction
//!
//! Turns the members one type declares into the lines of its class block.
//! Every member either yields lines or is skipped; extraction never fails.

use tracing::{debug, trace};

use super::database::{ClassBlock, Classifier, MemberLine};
use super::model::{ClassType, Field, Member};
use super::visibility::{classify, data_member, is_dunder};

/// Parameter names that stand for the implicit receiver
const RECEIVERS: &[&str] = &["self", "cls"];

/// Build the class block for the members `ty` declares itself
pub fn extract_members(ty: &ClassType) -> ClassBlock {
    let mut block = ClassBlock::new(ty.name());
    for member in ty.members() {
        for line in member_lines(ty.name(), member) {
            block.add_line(line);
        }
    }
    block.sort_by_visibility();
    trace!(class = ty.name(), lines = block.lines.len(), "Extracted members");
    block
}

/// Lines for a single member; empty when the member cannot be rendered
pub fn member_lines(owner: &str, member: &Member) -> Vec<MemberLine> {
    match member {
        Member::Method {
            name,
            params,
            returns,
            is_abstract,
        } => {
            let classifier = is_abstract.then_some(Classifier::Abstract);
            let params = params
                .iter()
                .filter(|p| !RECEIVERS.contains(&p.as_str()))
                .cloned()
                .collect();
            callable_line(owner, name, params, returns, *is_abstract, classifier)
                .into_iter()
                .collect()
        }
        Member::StaticMethod {
            name,
            params,
            returns,
            is_abstract,
        } => callable_line(
            owner,
            name,
            params.clone(),
            returns,
            *is_abstract,
            Some(Classifier::Static),
        )
        .into_iter()
        .collect(),
        Member::Property { name, returns } => match returns {
            Some(returns) => {
                let (visibility, display) = data_member(owner, name);
                vec![MemberLine::field(visibility, returns.as_str(), display)]
            }
            None => {
                debug!(class = owner, member = %name, "Skipping property without a return type");
                Vec::new()
            }
        },
        Member::Fields(fields) => fields.iter().map(|f| field_line(owner, f)).collect(),
        Member::Other { name } => {
            trace!(class = owner, member = %name, "Skipping unsupported member");
            Vec::new()
        }
    }
}

fn callable_line(
    owner: &str,
    name: &str,
    params: Vec<String>,
    returns: &str,
    is_abstract: bool,
    classifier: Option<Classifier>,
) -> Option<MemberLine> {
    if is_dunder(name) && !is_abstract {
        trace!(class = owner, member = name, "Skipping special method");
        return None;
    }
    Some(MemberLine::method(classify(name), name, params, returns).with_classifier(classifier))
}

fn field_line(owner: &str, field: &Field) -> MemberLine {
    let (visibility, display) = data_member(owner, &field.name);
    MemberLine::field(visibility, field.type_name.as_str(), display)
}

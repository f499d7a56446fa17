//! Type models loaded from JSON
//!
//! A model file declares classes by name. Loading resolves base names and
//! constructor parameter types into a shared [`ClassType`] graph.
//!
//! ```rust
//! use lineage::plugins::class::TypeModel;
//!
//! let model = TypeModel::from_json(r#"{
//!     "classes": [
//!         { "name": "Base" },
//!         { "name": "Leaf", "bases": ["Base"] }
//!     ]
//! }"#).unwrap();
//!
//! let leaf = model.get("Leaf").unwrap();
//! assert_eq!(leaf.primary_base().unwrap().name(), "Base");
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::model::{is_builtin, ClassType, Field, Member, TypeRef, ROOT_TYPE_NAME};
use crate::core::{DiagramError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelFile {
    classes: Vec<ClassDecl>,
}

#[derive(Debug, Deserialize)]
struct ClassDecl {
    name: String,
    #[serde(default)]
    bases: Vec<String>,
    #[serde(default)]
    members: Vec<MemberDecl>,
    #[serde(default)]
    constructor: Vec<ParamDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum MemberDecl {
    Method {
        name: String,
        #[serde(default)]
        params: Vec<String>,
        #[serde(default = "default_returns")]
        returns: String,
        #[serde(default, rename = "abstract")]
        is_abstract: bool,
    },
    StaticMethod {
        name: String,
        #[serde(default)]
        params: Vec<String>,
        #[serde(default = "default_returns")]
        returns: String,
        #[serde(default, rename = "abstract")]
        is_abstract: bool,
    },
    Property {
        name: String,
        #[serde(default)]
        returns: Option<String>,
    },
    Fields {
        fields: Vec<FieldDecl>,
    },
    Value {
        name: String,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
struct FieldDecl {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
}

#[derive(Debug, Deserialize)]
struct ParamDecl {
    name: String,
    #[serde(default, rename = "type")]
    type_name: Option<String>,
}

fn default_returns() -> String {
    "None".to_string()
}

impl MemberDecl {
    fn into_member(self) -> Option<Member> {
        match self {
            MemberDecl::Method {
                name,
                params,
                returns,
                is_abstract,
            } => Some(Member::Method {
                name,
                params,
                returns,
                is_abstract,
            }),
            MemberDecl::StaticMethod {
                name,
                params,
                returns,
                is_abstract,
            } => Some(Member::StaticMethod {
                name,
                params,
                returns,
                is_abstract,
            }),
            MemberDecl::Property { name, returns } => Some(Member::Property { name, returns }),
            MemberDecl::Fields { fields } => Some(Member::Fields(
                fields
                    .into_iter()
                    .map(|f| Field::new(f.name, f.type_name))
                    .collect(),
            )),
            MemberDecl::Value { name } => Some(Member::Other { name }),
            MemberDecl::Unknown => None,
        }
    }
}

/// A set of declared classes, resolved and ready to diagram
#[derive(Debug, Clone, Default)]
pub struct TypeModel {
    order: Vec<String>,
    types: HashMap<String, Arc<ClassType>>,
}

impl TypeModel {
    /// Parse and resolve a model from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ModelFile = serde_json::from_str(json)?;
        Self::resolve(file.classes)
    }

    /// Read and resolve a model file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let model = Self::from_json(&content)?;
        info!(path = %path.display(), classes = model.len(), "Loaded type model");
        Ok(model)
    }

    pub fn get(&self, name: &str) -> Option<Arc<ClassType>> {
        self.types.get(name).cloned()
    }

    /// Look up a class, failing with [`DiagramError::UnknownType`]
    pub fn require(&self, name: &str) -> Result<Arc<ClassType>> {
        self.get(name).ok_or_else(|| DiagramError::unknown_type(name))
    }

    /// Class names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn resolve(classes: Vec<ClassDecl>) -> Result<Self> {
        let mut decls: HashMap<String, ClassDecl> = HashMap::new();
        let mut order = Vec::with_capacity(classes.len());
        for decl in classes {
            if decls.contains_key(&decl.name) {
                return Err(DiagramError::DuplicateType { name: decl.name });
            }
            order.push(decl.name.clone());
            decls.insert(decl.name.clone(), decl);
        }

        let graph = DeclGraph::new(&decls);
        for name in &order {
            graph.check_bases(name)?;
        }

        let mut resolver = Resolver {
            decls,
            graph,
            resolved: HashMap::new(),
        };
        for name in &order {
            resolver.resolve(name)?;
        }

        Ok(Self {
            order,
            types: resolver.resolved,
        })
    }
}

/// Name-level view of the declarations: base edges and constructor edges
/// between declared classes
struct DeclGraph {
    bases: HashMap<String, Vec<String>>,
    parts: HashMap<String, Vec<String>>,
}

impl DeclGraph {
    fn new(decls: &HashMap<String, ClassDecl>) -> Self {
        let mut bases = HashMap::new();
        let mut parts = HashMap::new();
        for (name, decl) in decls {
            let declared_bases = decl
                .bases
                .iter()
                .filter(|base| base.as_str() != ROOT_TYPE_NAME)
                .cloned()
                .collect();
            let declared_parts = decl
                .constructor
                .iter()
                .filter_map(|param| param.type_name.as_ref())
                .filter(|type_name| decls.contains_key(type_name.as_str()))
                .cloned()
                .collect();
            bases.insert(name.clone(), declared_bases);
            parts.insert(name.clone(), declared_parts);
        }
        Self { bases, parts }
    }

    fn is_declared(&self, name: &str) -> bool {
        self.bases.contains_key(name)
    }

    /// Fail on an undeclared base or a base chain that loops back on itself
    fn check_bases(&self, name: &str) -> Result<()> {
        let mut on_path = HashSet::new();
        let mut finished = HashSet::new();
        self.visit_bases(name, &mut on_path, &mut finished)
    }

    fn visit_bases(
        &self,
        name: &str,
        on_path: &mut HashSet<String>,
        finished: &mut HashSet<String>,
    ) -> Result<()> {
        if finished.contains(name) {
            return Ok(());
        }
        if !on_path.insert(name.to_string()) {
            return Err(DiagramError::CyclicModel {
                name: name.to_string(),
            });
        }
        let bases = self
            .bases
            .get(name)
            .ok_or_else(|| DiagramError::unknown_type(name))?;
        for base in bases {
            self.visit_bases(base, on_path, finished)?;
        }
        on_path.remove(name);
        finished.insert(name.to_string());
        Ok(())
    }

    /// True if `to` can be reached from `from` over base and constructor edges
    fn reaches(&self, from: &str, to: &str) -> bool {
        let mut seen = HashSet::new();
        let mut stack = vec![from];
        while let Some(name) = stack.pop() {
            if name == to {
                return true;
            }
            if !seen.insert(name) {
                continue;
            }
            let edges = self.bases.get(name).into_iter().chain(self.parts.get(name));
            stack.extend(edges.flatten().map(String::as_str));
        }
        false
    }
}

/// Builds shared descriptors once the base graph is known to be acyclic
///
/// A constructor edge `owner -> part` is kept only when `owner` cannot be
/// reached back from `part`. Every remaining cycle runs through at least one
/// constructor edge, so dropping those edges leaves a DAG, and the choice
/// does not depend on declaration order.
struct Resolver {
    decls: HashMap<String, ClassDecl>,
    graph: DeclGraph,
    resolved: HashMap<String, Arc<ClassType>>,
}

impl Resolver {
    fn resolve(&mut self, name: &str) -> Result<Arc<ClassType>> {
        if let Some(ty) = self.resolved.get(name) {
            return Ok(Arc::clone(ty));
        }
        let decl = self
            .decls
            .remove(name)
            .ok_or_else(|| DiagramError::unknown_type(name))?;

        let mut builder = ClassType::builder(decl.name.as_str());
        for base in &decl.bases {
            if base == ROOT_TYPE_NAME {
                continue;
            }
            builder = builder.extends(self.resolve(base)?);
        }
        for member in decl.members {
            match member.into_member() {
                Some(member) => builder = builder.member(member),
                None => debug!(class = %decl.name, "Dropping member of unknown kind"),
            }
        }
        for param in decl.constructor {
            builder = match param.type_name {
                Some(type_name) => {
                    let annotation = self.param_type(&decl.name, &type_name)?;
                    builder.param(param.name, annotation)
                }
                None => builder.untyped_param(param.name),
            };
        }

        let ty = Arc::new(builder.build());
        self.resolved.insert(name.to_string(), Arc::clone(&ty));
        Ok(ty)
    }

    fn param_type(&mut self, owner: &str, type_name: &str) -> Result<TypeRef> {
        if is_builtin(type_name) {
            return Ok(TypeRef::Builtin(type_name.to_string()));
        }
        if !self.graph.is_declared(type_name) {
            return Ok(TypeRef::Unresolved(type_name.to_string()));
        }
        if self.graph.reaches(type_name, owner) {
            warn!(
                class = owner,
                type_name, "Constructor parameter type depends back on its owner; leaving it unresolved"
            );
            return Ok(TypeRef::Unresolved(type_name.to_string()));
        }
        self.resolve(type_name).map(TypeRef::Class)
    }
}

// Service Definition - class name plus tags

use crate::attributes::TagAttributes;

/// A named tag with its attribute bag
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub attributes: TagAttributes,
}

/// Service definition registered in the container
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    class: String,
    tags: Vec<Tag>,
}

impl Definition {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            tags: Vec::new(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Attach a tag without attributes
    pub fn add_tag(&mut self, name: impl Into<String>) -> &mut Self {
        self.add_tag_with(name, TagAttributes::new())
    }

    /// Attach a tag. The same tag may be added several times.
    pub fn add_tag_with(
        &mut self,
        name: impl Into<String>,
        attributes: TagAttributes,
    ) -> &mut Self {
        self.tags.push(Tag {
            name: name.into(),
            attributes,
        });
        self
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }

    /// Attribute bags of every occurrence of `name`, in insertion order
    pub fn tag_attributes<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TagAttributes> {
        self.tags
            .iter()
            .filter(move |t| t.name == name)
            .map(|t| &t.attributes)
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host types and mapping functions shared by the integration tests.

use confmaster::domain::{Deserializable, ObjectNode, Result, Serializable};

/// A host type that carries its own mapping logic.
#[allow(dead_code)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl Person {
    #[allow(dead_code)]
    pub fn new(name: &str, age: i32, email: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            email: email.to_string(),
        }
    }
}

impl Serializable for Person {
    fn serialize_into(&self, node: &mut ObjectNode) {
        person_serializer(node, self);
    }
}

impl Deserializable for Person {
    fn deserialize_from(&mut self, node: &ObjectNode) -> Result<()> {
        person_deserializer(self, node)
    }
}

/// External serializer with the same logic as `Person::serialize_into`.
#[allow(dead_code)]
pub fn person_serializer(node: &mut ObjectNode, person: &Person) {
    node.set("name", person.name.as_str())
        .set("age", person.age)
        .set("email", person.email.as_str());
}

/// External deserializer with the same logic as `Person::deserialize_from`.
#[allow(dead_code)]
pub fn person_deserializer(person: &mut Person, node: &ObjectNode) -> Result<()> {
    person.name = node.get_string("name")?;
    person.age = node.get_i32("age")?;
    person.email = node.get_string("email")?;
    Ok(())
}

/// An older shape of `Person` where the email was split into user and domain.
#[allow(dead_code)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyPerson {
    pub full_name: String,
    pub years: i16,
    pub mail_user: String,
    pub mail_domain: String,
}

/// Reads the legacy layout into the current `Person`.
#[allow(dead_code)]
pub fn legacy_person_deserializer(person: &mut Person, node: &ObjectNode) -> Result<()> {
    person.name = node.get_string("full_name")?;
    person.age = i32::from(node.get_i16("years")?);
    person.email = format!(
        "{}@{}",
        node.get_string("mail_user")?,
        node.get_string("mail_domain")?
    );
    Ok(())
}

/// Writes a `LegacyPerson` in the legacy layout.
#[allow(dead_code)]
pub fn legacy_person_serializer(node: &mut ObjectNode, person: &LegacyPerson) {
    node.set("full_name", person.full_name.as_str())
        .set("years", person.years)
        .set("mail_user", person.mail_user.as_str())
        .set("mail_domain", person.mail_domain.as_str());
}

/// A host type mapped only through external functions.
#[allow(dead_code)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Endpoint {
    pub host: String,
    pub port: i16,
    pub secure: bool,
    pub weights: Vec<f64>,
}

#[allow(dead_code)]
pub fn endpoint_serializer(node: &mut ObjectNode, endpoint: &Endpoint) {
    node.set("host", endpoint.host.as_str())
        .set("port", endpoint.port)
        .set("secure", endpoint.secure)
        .set(
            "weights",
            endpoint
                .weights
                .iter()
                .copied()
                .collect::<confmaster::domain::ListNode>(),
        );
}

#[allow(dead_code)]
pub fn endpoint_deserializer(endpoint: &mut Endpoint, node: &ObjectNode) -> Result<()> {
    endpoint.host = node.get_string("host")?;
    endpoint.port = node.get_i16("port")?;
    endpoint.secure = node.get_bool("secure")?;
    let weights = node.get_list("weights")?;
    endpoint.weights = (0..weights.len())
        .map(|i| weights.get_f64(i))
        .collect::<Result<Vec<_>>>()?;
    Ok(())
}

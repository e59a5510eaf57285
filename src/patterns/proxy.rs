//! The proxy pattern: access to a [`Service`] is guarded by an allow-list.

use std::collections::HashSet;

use crate::ExclusiveOwner;

/// A named service.
pub trait Service {
    /// Handles a request and returns the response.
    fn request(&self) -> String;
}

/// A [`Service`] responding with its own name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceA {
    name: String,
}

impl ServiceA {
    /// Creates a new service.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Service for ServiceA {
    #[inline]
    fn request(&self) -> String {
        self.name.clone()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Proxy
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Forwards requests to an owned [`ServiceA`] of the same name, if the name
/// is allowed, and responds with an empty string otherwise.
#[derive(Debug)]
pub struct Proxy {
    name: String,
    allowed: HashSet<String>,
    service: ExclusiveOwner<ServiceA>,
}

impl Proxy {
    /// Creates a proxy and the service behind it.
    #[inline]
    pub fn new(name: impl Into<String>, allowed: HashSet<String>) -> Self {
        let name = name.into();
        let service = ExclusiveOwner::new(ServiceA::new(name.clone()));
        Self { name, allowed, service }
    }

    #[inline]
    fn allow(&self) -> bool {
        self.allowed.contains(&self.name)
    }
}

impl Service for Proxy {
    #[inline]
    fn request(&self) -> String {
        if !self.allow() {
            log::debug!("proxy denied request for {:?}", self.name);
            return String::new();
        }

        self.service.request()
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recording handler probes.

use std::sync::{Arc, Mutex, PoisonError};

use crate::node::{Arg, Handler, Props};

/// A handler stub that records every call.
#[derive(Debug, Clone, Default)]
pub struct Probe {
    calls: Arc<Mutex<Vec<Vec<Arg>>>>,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that records its arguments into this probe.
    pub fn handler(&self) -> Handler {
        let calls = Arc::clone(&self.calls);
        Handler::new(move |args| {
            calls.lock().unwrap_or_else(PoisonError::into_inner).push(args.to_vec());
        })
    }

    pub fn called(&self) -> bool {
        self.call_count() > 0
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Arguments of the first call, if any.
    pub fn first_call(&self) -> Option<Vec<Arg>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).first().cloned()
    }
}

/// A fresh probe for every catalog event handler.
#[derive(Debug)]
pub struct EventProbes {
    probes: Vec<(&'static str, Probe)>,
}

impl EventProbes {
    pub fn fresh() -> Self {
        let probes = super::event_handlers().iter().map(|name| (*name, Probe::new())).collect();
        Self { probes }
    }

    /// Props mapping every handler name to its probe.
    pub fn props(&self) -> Props {
        self.probes.iter().map(|(name, probe)| (*name, probe.handler().into())).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Probe)> {
        self.probes.iter().map(|(name, probe)| (*name, probe))
    }
}

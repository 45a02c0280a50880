/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! A typemap used to store configuration for an operation.
//!
//! Middleware stages read their inputs (endpoint parameters, resolvers, signing configuration)
//! from the bag and write their outputs (signing region, signing service) back into it.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard};

struct NamedType {
    name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl NamedType {
    fn as_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut()
    }

    fn into_value<T: 'static>(self) -> Option<T> {
        self.value.downcast().map(|t| *t).ok()
    }
}

/// A type map of values keyed by their type
///
/// At most one value of each type may be stored.
#[derive(Default)]
pub struct PropertyBag {
    map: HashMap<TypeId, NamedType>,
}

impl PropertyBag {
    pub fn new() -> PropertyBag {
        PropertyBag {
            map: HashMap::new(),
        }
    }

    /// Insert a type into this `PropertyBag`.
    ///
    /// If a value of this type already existed, it will be returned.
    pub fn insert<T: 'static + Send + Sync>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(
                TypeId::of::<T>(),
                NamedType {
                    name: std::any::type_name::<T>(),
                    value: Box::new(val),
                },
            )
            .and_then(|val| val.into_value())
    }

    /// Get a reference to a type previously inserted on this `PropertyBag`.
    pub fn get<T: 'static + Send + Sync>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|val| val.value.downcast_ref())
    }

    /// Get a mutable reference to a type previously inserted on this `PropertyBag`.
    pub fn get_mut<T: 'static + Send + Sync>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|val| val.as_mut())
    }

    /// Remove a type from this `PropertyBag`, returning it if it was present.
    pub fn remove<T: 'static + Send + Sync>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|val| val.into_value())
    }

    pub fn contains<T: 'static + Send + Sync>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.map.values().map(|item| item.name).collect();
        names.sort_unstable();
        f.debug_struct("PropertyBag")
            .field("contents", &names)
            .finish()
    }
}

/// A property bag shared between clones of a request
///
/// Clones made for retries share the same bag, so a stage that records a value on the
/// first attempt sees it on later attempts.
#[derive(Clone, Debug, Default)]
pub struct SharedPropertyBag(Arc<Mutex<PropertyBag>>);

impl SharedPropertyBag {
    pub fn new() -> Self {
        SharedPropertyBag(Arc::new(Mutex::new(PropertyBag::new())))
    }

    /// Lock the bag for reading or writing
    pub fn acquire(&self) -> MutexGuard<'_, PropertyBag> {
        match self.0.lock() {
            Ok(guard) => guard,
            // the bag holds plain data, a panic while it was held cannot leave it torn
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl From<PropertyBag> for SharedPropertyBag {
    fn from(bag: PropertyBag) -> Self {
        SharedPropertyBag(Arc::new(Mutex::new(bag)))
    }
}

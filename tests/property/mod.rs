// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module

mod organization_merge;
mod profile_rendering;
mod strategies;

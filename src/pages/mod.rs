// SPDX-License-Identifier: MPL-2.0

//! Page view modules for the Filterdrop application.

pub mod filters;

// SPDX-License-Identifier: MPL-2.0

//! Custom widgets for the Filterdrop application.

pub mod dropdown_filter;

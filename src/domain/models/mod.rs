// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod extraction_rule;
pub mod job_record;
pub mod search_request;
pub mod site_profile;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod extraction;
pub mod orchestrator;
pub mod profiles;
pub mod storage;
pub mod transport;

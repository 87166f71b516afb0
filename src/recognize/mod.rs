//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! Declaration recognizers: one module per top-level shape, each
//! invoked from [`crate::scanner::Scanner`]'s dispatch once a word has been
//! classified. Every recognizer shares the same contract: on entry, the
//! classifying word (and, where noted, any leading punctuation) has already been
//! consumed; on exit, it returns the next "current" character for the driving
//! loop, exactly like the skip primitives it's built from.

pub mod assertion;
pub mod block;
pub mod class_decl;
pub mod define_decl;
pub mod design_element;
pub mod enum_decl;
pub mod function_task;
pub mod name_list;
pub mod param_list;
pub mod port_list;
pub mod struct_union;
pub mod typedef_decl;

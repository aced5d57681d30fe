pub mod survey_controllers;

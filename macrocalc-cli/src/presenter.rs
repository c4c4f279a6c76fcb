use std::io::{self, Write};

use macrocalc_model::MacroPlan;
use serde_json::json;

#[mockall::automock]
pub trait Presenter {
    fn show_pending(&mut self) -> io::Result<()>;
    fn show_plan(&mut self, plan: &MacroPlan) -> io::Result<()>;
    fn show_incomplete(&mut self) -> io::Result<()>;
}

pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show_pending(&mut self) -> io::Result<()> {
        writeln!(self.out, "Fill in your details and calculate to see your macros.")
    }

    fn show_plan(&mut self, plan: &MacroPlan) -> io::Result<()> {
        writeln!(self.out, "Your Custom Macro Plan")?;
        writeln!(self.out, "{:<10}{}", "Calories", plan.calories)?;
        writeln!(self.out, "{:<10}{}g", "Protein", plan.protein_grams)?;
        writeln!(self.out, "{:<10}{}g", "Carbs", plan.carb_grams)?;
        writeln!(self.out, "{:<10}{}g", "Fat", plan.fat_grams)?;
        if plan.has_negative_carbs() {
            writeln!(
                self.out,
                "Warning: calories do not cover the protein and fat targets."
            )?;
        }
        self.out.flush()
    }

    fn show_incomplete(&mut self) -> io::Result<()> {
        writeln!(self.out, "Please fill in all fields.")
    }
}

/// Writes one JSON object per result, for piping into other tools.
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, value: serde_json::Value) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &value)?;
        writeln!(self.out)
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn show_pending(&mut self) -> io::Result<()> {
        self.write(json!({ "state": "pending" }))
    }

    fn show_plan(&mut self, plan: &MacroPlan) -> io::Result<()> {
        self.write(json!({
            "state": "ready",
            "calories": plan.calories_kcal(),
            "protein": plan.protein_g(),
            "fat": plan.fat_g(),
            "carbs": plan.carbs_g(),
        }))
    }

    fn show_incomplete(&mut self) -> io::Result<()> {
        self.write(json!({ "state": "incomplete" }))
    }
}

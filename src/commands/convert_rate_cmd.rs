use crate::commands::base_commands::Commands;
use crate::commands::error::CommandError;
use crate::domain::cost::is_valid_amount;
use crate::domain::team_member::CompensationType;
use crate::services::compensation::convert_cost_value;

pub fn convert_rate_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::ConvertRate { value, from, to } = cmd {
        if !is_valid_amount(value) {
            return Err(CommandError::InvalidRate(value));
        }
        let from = CompensationType::from(from);
        let to = CompensationType::from(to);
        let converted = convert_cost_value(value, from, to);
        println!(
            "{value:.2} {} = {converted:.2} {}",
            from.as_str(),
            to.as_str()
        );
    }
    Ok(())
}

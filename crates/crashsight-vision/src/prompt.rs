//! Assessment prompt
//!
//! One deterministic instruction string: the three-tier severity rubric,
//! the required analysis fields, and the target JSON schema. No per-request
//! text is interpolated; the image travels separately in the same message.

/// Prompt sent with every accident photo.
pub const ASSESSMENT_PROMPT: &str = r#"Analyze the severity of the vehicle accident in this image and classify it as one of these three levels:
- light: a minor accident with slight property damage and no or minor injuries
- moderate: an accident with moderate damage, possibly with injuries requiring treatment
- severe: a serious accident with major damage, serious injuries, or possible fatalities

Provide the following analysis:
1. The make and model of the vehicle shown in the image.
2. A description of the damage, including effects on other systems of the vehicle.
3. Recommendations on how to proceed with repairs.
4. An estimated repair cost.
5. A single list of parts that are damaged or may be affected, each with:
   - the part name
   - the damage detail, or the reason it needs to be checked
   - a status: needs repair, needs replacement, or needs further inspection

Present the result as a JSON object with this structure:
{
  "severity": "light/moderate/severe",
  "models": "vehicle make and model",
  "description": "description of the damage",
  "recommendations": "repair recommendations",
  "price": "estimated repair cost",
  "fixinglist": [
    {
      "tool": "part name",
      "detail": "damage detail or reason for inspection",
      "status": "needs repair / needs replacement / needs further inspection"
    }
  ]
}"#;

//! Small two-season dataset shared by the unit tests

use crate::loader::Dataset;

pub const MATCHES_CSV: &str = "\
id,season,city,date,team1,team2,toss_winner,toss_decision,result,dl_applied,winner,win_by_runs,win_by_wickets,player_of_match,venue,umpire1,umpire2
1,2017,Hyderabad,2017-04-05,SRH,RCB,RCB,field,normal,0,SRH,35,0,Yuvraj Singh,Rajiv Gandhi International Stadium,,
2,2017,Pune,2017-04-06,MI,RPS,RPS,field,normal,0,RPS,0,7,SPD Smith,Maharashtra Cricket Association Stadium,,
3,2017,Hyderabad,2017-05-21,MI,RPS,MI,bat,normal,0,MI,1,0,KH Pandya,Rajiv Gandhi International Stadium,,
4,2018,Mumbai,2018-04-07,Mumbai Indians,Chennai Super Kings,Chennai Super Kings,field,normal,0,Chennai Super Kings,0,1,DJ Bravo,Wankhede Stadium,,
5,2018,Bangalore,26/04/18,RCB,MI,RCB,field,no result,0,,0,0,,M Chinnaswamy Stadium,,
6,2018,Mumbai,2018-05-27,SRH,CSK,CSK,field,normal,0,CSK,0,8,SR Watson,Wankhede Stadium,,
";

pub const DELIVERIES_CSV: &str = "\
match_id,inning,batting_team,bowling_team,over,ball,batsman,bowler,wide_runs,noball_runs,batsman_runs,extra_runs,total_runs,player_dismissed,dismissal_kind
1,1,SRH,RCB,1,1,DA Warner,TS Mills,0,0,4,0,4,,
1,1,SRH,RCB,1,2,DA Warner,TS Mills,0,0,6,0,6,,
1,1,SRH,RCB,15,1,DA Warner,YS Chahal,0,0,0,0,0,DA Warner,caught
1,1,SRH,RCB,15,2,S Dhawan,YS Chahal,0,0,1,0,1,,
1,2,RCB,SRH,1,1,V Kohli,B Kumar,0,0,4,0,4,,
1,2,RCB,SRH,16,1,V Kohli,B Kumar,1,0,0,1,1,,
1,2,RCB,SRH,16,2,V Kohli,B Kumar,0,0,0,0,0,V Kohli,bowled
1,2,RCB,SRH,17,1,CH Gayle,Rashid Khan,0,0,6,0,6,,
2,1,MI,RPS,1,1,RG Sharma,BA Stokes,0,0,1,0,1,,
2,1,MI,RPS,18,1,KA Pollard,BA Stokes,0,0,6,0,6,,
2,1,MI,RPS,18,2,KA Pollard,BA Stokes,0,0,0,0,0,KA Pollard,run out
2,2,RPS,MI,2,1,SPD Smith,JJ Bumrah,0,0,4,0,4,,
2,2,RPS,MI,19,1,SPD Smith,JJ Bumrah,0,0,2,0,2,,
3,1,MI,RPS,1,1,RG Sharma,JD Unadkat,0,0,4,0,4,,
3,1,MI,RPS,20,1,KH Pandya,JD Unadkat,0,0,0,0,0,KH Pandya,lbw
3,2,RPS,MI,1,1,SPD Smith,JJ Bumrah,0,0,0,0,0,SPD Smith,bowled
3,2,RPS,MI,2,1,AM Rahane,JJ Bumrah,0,0,0,0,0,AM Rahane,caught
3,2,RPS,MI,3,1,MS Dhoni,JJ Bumrah,0,0,0,0,0,MS Dhoni,caught
3,2,RPS,MI,4,1,MK Tiwary,JJ Bumrah,0,0,0,0,0,MK Tiwary,lbw
4,1,Mumbai Indians,Chennai Super Kings,1,1,RG Sharma,DJ Bravo,0,0,6,0,6,,
4,1,Mumbai Indians,Chennai Super Kings,1,2,RG Sharma,DJ Bravo,0,0,4,0,4,,
4,1,Mumbai Indians,Chennai Super Kings,15,1,RG Sharma,DJ Bravo,0,0,0,0,0,RG Sharma,caught
4,2,Chennai Super Kings,Mumbai Indians,1,1,SR Watson,JJ Bumrah,0,0,1,0,1,,
4,2,Chennai Super Kings,Mumbai Indians,14,1,DJ Bravo,JJ Bumrah,0,0,6,0,6,,
4,2,Chennai Super Kings,Mumbai Indians,14,2,DJ Bravo,JJ Bumrah,0,0,0,0,0,DJ Bravo,caught
5,1,RCB,MI,1,1,V Kohli,JJ Bumrah,0,0,4,0,4,,
5,1,RCB,MI,2,1,V Kohli,JJ Bumrah,0,0,1,0,1,,
6,1,SRH,CSK,1,1,KS Williamson,DJ Bravo,0,0,4,0,4,,
6,1,SRH,CSK,19,1,KS Williamson,DJ Bravo,0,0,1,0,1,,
6,2,CSK,SRH,1,1,SR Watson,B Kumar,0,0,6,0,6,,
6,2,CSK,SRH,2,1,SR Watson,B Kumar,0,0,6,0,6,,
6,2,CSK,SRH,15,1,SR Watson,Rashid Khan,0,0,4,0,4,,
";

pub fn sample_dataset() -> Dataset {
    Dataset::from_readers(MATCHES_CSV.as_bytes(), DELIVERIES_CSV.as_bytes())
        .expect("sample dataset should parse")
}

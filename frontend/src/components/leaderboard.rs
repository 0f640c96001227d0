use common::Leaderboard as Ranking;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LeaderboardProps {
    pub ranking: Ranking,
    pub back: Callback<()>,
}

#[function_component]
pub fn Leaderboard(LeaderboardProps { ranking, back }: &LeaderboardProps) -> Html {
    let back = {
        let back = back.clone();
        move |_| back.emit(())
    };

    html! {
        <div class="leaderboard">
            <h1>{"Leaderboard"}</h1>
            <table>
                <thead>
                    <tr>
                        <th>{"Rank"}</th>
                        <th>{"Name"}</th>
                        <th>{"Moves"}</th>
                        <th>{"Time (s)"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for ranking.top().iter().enumerate().map(|(i, score)| html! {
                        <tr key={i}>
                            <td>{i + 1}</td>
                            <td>{score.name.clone()}</td>
                            <td>{score.moves}</td>
                            <td>{score.time}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
            <button onclick={back}>{"back"}</button>
        </div>
    }
}
